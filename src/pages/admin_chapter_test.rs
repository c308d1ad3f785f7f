use super::*;

#[test]
fn parse_route_id_accepts_numeric_params() {
    assert_eq!(parse_route_id(Some("12".to_owned())), Some(12));
    assert_eq!(parse_route_id(Some("0".to_owned())), Some(0));
}

#[test]
fn parse_route_id_rejects_non_numeric_params() {
    assert_eq!(parse_route_id(Some("twelve".to_owned())), None);
    assert_eq!(parse_route_id(Some("12.5".to_owned())), None);
    assert_eq!(parse_route_id(Some(String::new())), None);
}

#[test]
fn parse_route_id_rejects_missing_params() {
    assert_eq!(parse_route_id(None), None);
}
