use super::*;

#[test]
fn empty_selection_has_no_composite() {
    let sel = Selection::empty();
    assert!(sel.is_empty());
    assert_eq!(sel.composite().count(), 0);
    for c in Category::ALL {
        assert_eq!(sel.get(c), None);
    }
}

#[test]
fn composite_is_in_painter_order_regardless_of_insert_order() {
    let mut sel = Selection::empty();
    sel.put(Category::Hat, Some("Crown".to_owned()));
    sel.put(Category::Background, Some("aztec".to_owned()));
    sel.put(Category::Eyes, Some("eyes3 copy".to_owned()));

    let layers: Vec<_> = sel.composite().collect();
    assert_eq!(
        layers,
        vec![
            (Category::Background, "aztec"),
            (Category::Eyes, "eyes3 copy"),
            (Category::Hat, "Crown"),
        ]
    );
}

#[test]
fn clear_all_resets_every_slot() {
    let mut sel = Selection::empty();
    for c in Category::ALL {
        sel.put(c, Some(c.as_str().to_owned()));
    }
    assert!(!sel.is_empty());
    sel.clear_all();
    assert_eq!(sel, Selection::empty());
}
