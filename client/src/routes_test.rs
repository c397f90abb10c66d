use super::*;

#[test]
fn paths_match_route_table() {
    assert_eq!(AppRoute::Splash.path(), "/");
    assert_eq!(AppRoute::HowTo.path(), "/home/howTo");
    assert_eq!(AppRoute::Main.path(), "/home/main");
    assert_eq!(AppRoute::WishAdd.path(), "/wish/add");
}

#[test]
fn push_request_keeps_history_entry() {
    let request = NavRequest::push(AppRoute::WishAdd);
    assert_eq!(request.mode, NavMode::Push);
    assert!(!request.options().replace);
}

#[test]
fn replace_request_sets_replace_option() {
    let request = NavRequest::replace(AppRoute::Main);
    assert_eq!(request.route, AppRoute::Main);
    assert!(request.options().replace);
}
