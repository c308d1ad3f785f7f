//! Modal dialog for uploading a new audio lesson into a chapter.
//!
//! DESIGN
//! ======
//! The dialog owns its form state machine; the parent only learns about
//! dismissal (`on_close`) and successful creation (`on_created`). Both fire
//! one feedback beat after the triggering event and check a liveness flag,
//! so a dialog that unmounts first makes no further calls.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

use crate::components::spinner::Roller;
use crate::config::AppConfig;
use crate::net::api::{FIELD_CLOSING_NOTE, FIELD_LECTURE, FIELD_OPENING_NOTE};
use crate::state::lesson_form::{FormPhase, LessonFormState};
#[cfg(feature = "hydrate")]
use crate::util::feedback::{DelayedAction, show_clicked};

/// Admin dialog for creating a lesson under one course chapter.
#[component]
pub fn LessonCreationForm(
    course_id: i64,
    chapter_id: i64,
    on_close: Callback<()>,
    on_created: Callback<()>,
) -> impl IntoView {
    let _config = expect_context::<AppConfig>();
    let form = RwSignal::new(LessonFormState::default());
    let cancel_ref = NodeRef::<leptos::html::Button>::new();

    #[cfg(feature = "hydrate")]
    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    #[cfg(feature = "hydrate")]
    let lecture_file = Rc::new(RefCell::new(None::<web_sys::File>));

    #[cfg(feature = "hydrate")]
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
        // Release the preview object URL once the dialog is gone.
        on_cleanup(move || {
            let url = form.with_untracked(|f| f.lecture.as_ref().map(|l| l.preview_url.clone()));
            if let Some(url) = url {
                if !url.is_empty() {
                    let _ = web_sys::Url::revoke_object_url(&url);
                }
            }
        });
    }

    let on_file_change = {
        #[cfg(feature = "hydrate")]
        {
            let lecture_file = Rc::clone(&lecture_file);
            move |ev: leptos::ev::Event| {
                let input: web_sys::HtmlInputElement = event_target(&ev);
                match input.files().and_then(|files| files.get(0)) {
                    Some(file) => {
                        let stale =
                            form.with_untracked(|f| f.lecture.as_ref().map(|l| l.preview_url.clone()));
                        if let Some(stale) = stale {
                            if !stale.is_empty() {
                                let _ = web_sys::Url::revoke_object_url(&stale);
                            }
                        }
                        let preview_url =
                            web_sys::Url::create_object_url_with_blob(&file).unwrap_or_default();
                        form.update(|f| f.attach_lecture(file.name(), preview_url));
                        *lecture_file.borrow_mut() = Some(file);
                    }
                    None => form.update(|f| f.flag_missing_selection()),
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_submit = {
        #[cfg(feature = "hydrate")]
        {
            let lecture_file = Rc::clone(&lecture_file);
            let api_host = _config.api_host.clone();
            let alive = alive.clone();
            let created_delay = Rc::new(RefCell::new(DelayedAction::new()));
            move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                let mut started = false;
                form.update(|f| started = f.begin_submit());
                if !started {
                    return;
                }
                let Some(file) = lecture_file.borrow().clone() else {
                    // State validated a selection; a lost live handle must not
                    // wedge the submitting phase.
                    form.update(|f| f.fail());
                    return;
                };
                let (opening_note, closing_note) =
                    form.with_untracked(|f| (f.opening_note.clone(), f.closing_note.clone()));
                let api_host = api_host.clone();
                let alive = alive.clone();
                let created_delay = Rc::clone(&created_delay);
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::create_lecture(
                        &api_host,
                        course_id,
                        chapter_id,
                        &opening_note,
                        &closing_note,
                        &file,
                    )
                    .await;
                    match result {
                        Ok(()) => {
                            let _ = form.try_update(|f| f.succeed());
                            created_delay.borrow_mut().schedule(move || {
                                if alive.load(std::sync::atomic::Ordering::Relaxed) {
                                    on_created.run(());
                                }
                            });
                        }
                        Err(detail) => {
                            log::debug!("lesson upload failed: {detail}");
                            let _ = form.try_update(|f| f.fail());
                        }
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::SubmitEvent| {
                let _ = (course_id, chapter_id, on_created);
            }
        }
    };

    let on_cancel = {
        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let close_delay = Rc::new(RefCell::new(DelayedAction::new()));
            move |_: leptos::ev::MouseEvent| {
                if let Some(button) = cancel_ref.get() {
                    show_clicked(&button);
                }
                let alive = alive.clone();
                close_delay.borrow_mut().schedule(move || {
                    if alive.load(std::sync::atomic::Ordering::Relaxed) {
                        on_close.run(());
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_: leptos::ev::MouseEvent| {}
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--lesson" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create lesson"</h2>
                <form class="lesson-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Opening note"
                        <textarea
                            class="dialog__input"
                            name=FIELD_OPENING_NOTE
                            prop:value=move || form.with(|f| f.opening_note.clone())
                            on:input=move |ev| {
                                form.update(|f| f.note_input(FIELD_OPENING_NOTE, event_target_value(&ev)));
                            }
                            disabled=move || form.with(LessonFormState::is_submitting)
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Closing note"
                        <textarea
                            class="dialog__input"
                            name=FIELD_CLOSING_NOTE
                            prop:value=move || form.with(|f| f.closing_note.clone())
                            on:input=move |ev| {
                                form.update(|f| f.note_input(FIELD_CLOSING_NOTE, event_target_value(&ev)));
                            }
                            disabled=move || form.with(LessonFormState::is_submitting)
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Lecture"
                        <input
                            class="dialog__input dialog__input--file"
                            type="file"
                            name=FIELD_LECTURE
                            accept="audio/*"
                            on:change=on_file_change
                            disabled=move || form.with(LessonFormState::is_submitting)
                        />
                    </label>

                    <Show when=move || form.with(|f| f.lecture.is_some())>
                        <div class="lesson-form__preview">
                            <span class="lesson-form__file-name">
                                {move || {
                                    form.with(|f| {
                                        f.lecture.as_ref().map(|l| l.file_name.clone()).unwrap_or_default()
                                    })
                                }}
                            </span>
                            <audio
                                class="lesson-form__audio"
                                controls=true
                                src=move || {
                                    form.with(|f| {
                                        f.lecture.as_ref().map(|l| l.preview_url.clone()).unwrap_or_default()
                                    })
                                }
                            ></audio>
                        </div>
                    </Show>

                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="lesson-form__error">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <Show when=move || form.with(|f| f.phase == FormPhase::Succeeded)>
                        <p class="lesson-form__success">"lesson created successfully"</p>
                    </Show>

                    <div class="dialog__actions">
                        <button type="button" class="btn" node_ref=cancel_ref on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || form.with(LessonFormState::is_submitting)
                        >
                            <Show
                                when=move || !form.with(LessonFormState::is_submitting)
                                fallback=|| view! { <Roller /> }
                            >
                                "Create"
                            </Show>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
