use crate::cookie::{
    SESSION_COOKIE_NAME, create_logout_cookie, create_session_cookie, session_token_from_header,
};

#[test]
fn given_session_cookie_when_built_then_token_round_trips_through_parser() {
    let set_cookie = create_session_cookie("tok123");

    // A browser echoes the name=value pair back in the Cookie header
    let pair = set_cookie.split(';').next().unwrap();
    assert_eq!(session_token_from_header(pair), Some("tok123"));
}

#[test]
fn given_session_cookie_when_built_then_it_is_http_only() {
    let set_cookie = create_session_cookie("tok123");

    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.starts_with(SESSION_COOKIE_NAME));
}

#[test]
fn given_logout_cookie_when_built_then_it_expires_immediately() {
    let set_cookie = create_logout_cookie();

    assert!(set_cookie.contains("Max-Age=0"));
}

#[test]
fn given_header_with_multiple_cookies_when_parsed_then_session_token_is_found() {
    let header = format!("theme=dark; {SESSION_COOKIE_NAME}=tok123; lang=en");

    assert_eq!(session_token_from_header(&header), Some("tok123"));
}

#[test]
fn given_header_with_prefixed_cookie_name_when_parsed_then_no_match() {
    let header = format!("{SESSION_COOKIE_NAME}_other=nope");

    assert_eq!(session_token_from_header(&header), None);
}

#[test]
fn given_header_without_session_cookie_when_parsed_then_no_match() {
    assert_eq!(session_token_from_header("theme=dark; lang=en"), None);
    assert_eq!(session_token_from_header(""), None);
}
