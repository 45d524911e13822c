use super::*;

#[test]
fn nav_links_cover_every_content_page() {
    let paths: Vec<&str> = NAV_LINKS.iter().map(|(path, _)| *path).collect();
    assert_eq!(paths, ["/", "/services", "/portfolio", "/contact", "/offers-and-updates"]);
}

#[test]
fn nav_link_class_marks_exact_match_active() {
    assert_eq!(nav_link_class("/services", "/services"), "navbar__link navbar__link--active");
    assert_eq!(nav_link_class("/", "/services"), "navbar__link");
}

#[test]
fn nav_link_class_home_not_active_on_subpages() {
    assert_eq!(nav_link_class("/", "/portfolio"), "navbar__link");
    assert_eq!(nav_link_class("/", "/"), "navbar__link navbar__link--active");
}
