use super::resolve::NameAllocator;

#[test]
fn counters_start_at_zero_per_base() {
    let mut names = NameAllocator::new();

    assert_eq!(names.allocate("author"), "author_0");
    assert_eq!(names.allocate("author"), "author_1");
    assert_eq!(names.allocate("Page"), "Page_0");
    assert_eq!(names.allocate("author"), "author_2");
}

#[test]
fn fresh_allocator_restarts() {
    let mut first = NameAllocator::new();
    first.allocate("x");

    let mut second = NameAllocator::new();
    assert_eq!(second.allocate("x"), "x_0");
}
