use super::*;

#[test]
fn completes_once_every_section_arrives() {
    let mut b = RegistrationBarrier::new(["hero", "about", "contact"]);
    assert_eq!(b.expected(), 3);
    assert!(!b.arrive("about"));
    assert!(!b.arrive("about"));
    assert_eq!(b.remaining(), vec!["contact", "hero"]);
    assert!(!b.arrive("hero"));
    assert!(b.arrive("contact"));
    assert!(b.is_complete());
}

#[test]
fn unknown_names_do_not_count() {
    let mut b = RegistrationBarrier::new(["hero"]);
    assert!(!b.arrive("footer"));
    assert_eq!(b.remaining(), vec!["hero"]);
}

#[test]
fn empty_barrier_is_complete() {
    let b = RegistrationBarrier::new(Vec::<String>::new());
    assert!(b.is_complete());
}
