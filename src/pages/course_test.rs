use super::*;

#[test]
fn outline_chapters_are_numbered_sequentially_from_one() {
    let nums: Vec<u32> = sample_outline().iter().map(|c| c.num).collect();
    assert_eq!(nums, vec![1, 2, 3]);
}

#[test]
fn every_outline_chapter_has_lessons() {
    for chapter in sample_outline() {
        assert!(!chapter.lessons.is_empty(), "chapter {} has no lessons", chapter.num);
    }
}

#[test]
fn finished_chapters_contain_only_finished_lessons() {
    for chapter in sample_outline() {
        if chapter.completed == CompletionStatus::Finished {
            assert!(chapter.lessons.iter().all(|l| l.completed == CompletionStatus::Finished));
        }
    }
}

#[test]
fn pending_chapters_contain_no_navigable_lessons() {
    for chapter in sample_outline() {
        if chapter.completed == CompletionStatus::Pending {
            assert!(chapter.lessons.iter().all(|l| !l.completed.is_navigable()));
        }
    }
}

#[test]
fn the_outline_covers_every_completion_state() {
    let outline = sample_outline();
    for status in
        [CompletionStatus::Finished, CompletionStatus::Ongoing, CompletionStatus::Pending]
    {
        assert!(outline.iter().any(|c| c.completed == status));
    }
}
