use super::*;

fn vp() -> Viewport {
    Viewport::new(1000.0, 800.0).unwrap()
}

#[test]
fn blocks_stack_with_padding_and_gap() {
    let mut m = Markup::new("services").padding(100.0).gap(20.0);
    m.block("heading", Extent::Px(200.0));
    m.block("footer", Extent::Px(50.0));
    let placed = FlowLayout::new(vp()).place(&m, 1000.0).unwrap();
    assert_eq!(placed.rect, Rect::new(0.0, 1000.0, 1000.0, 1470.0));
    assert_eq!(placed.nodes[0].0, "services.heading");
    assert_eq!(placed.nodes[0].2.y0, 1100.0);
    assert_eq!(placed.nodes[1].2.y0, 1320.0);
    assert_eq!(placed.next_top, 1470.0);
}

#[test]
fn grid_wraps_rows_and_sizes_auto_parent() {
    let mut m = Markup::new("skills");
    let grid = m.grid(None, "grid", 3, 10.0);
    for i in 0..5 {
        m.child(grid, &format!("card.{i}"), Extent::Px(100.0));
    }
    let placed = FlowLayout::new(vp()).place(&m, 0.0).unwrap();
    let grid_rect = placed.nodes[0].2;
    assert_eq!(grid_rect.height(), 210.0);
    let card3 = placed.nodes[4].2;
    assert_eq!(placed.nodes[4].0, "skills.grid.card.3");
    assert_eq!(card3.y0, 110.0);
    assert_eq!(card3.x0, 0.0);
    let card1 = placed.nodes[2].2;
    assert!((card1.x0 - (980.0 / 3.0 + 10.0)).abs() < 1e-9);
}

#[test]
fn overlays_cover_parent_and_min_height_applies() {
    let mut m = Markup::new("hero")
        .min_height(Extent::Vh(100.0))
        .pin_spacing(Extent::Vh(130.0));
    let text = m.overlay(None, "text");
    m.child(text, "line", Extent::Px(40.0));
    let placed = FlowLayout::new(vp()).place(&m, 0.0).unwrap();
    assert_eq!(placed.rect.height(), 800.0);
    assert_eq!(placed.nodes[0].2, placed.rect);
    assert_eq!(placed.nodes[1].2.height(), 40.0);
    assert_eq!(placed.next_top, 800.0 + 1040.0);
}

#[test]
fn mount_links_parents() {
    let mut m = Markup::new("faq");
    let list = m.block("list", Extent::Auto);
    m.child(list, "item.0", Extent::Px(60.0));
    let mut stage = Stage::new();
    let mounted = FlowLayout::new(vp()).mount(&mut stage, &m, 0.0).unwrap();
    assert_eq!(mounted.elements.len(), 2);
    let item = stage.get(mounted.elements[1]).unwrap();
    assert_eq!(item.parent, Some(mounted.elements[0]));
    assert_eq!(stage.get(mounted.elements[0]).unwrap().parent, Some(mounted.root));
}

#[test]
fn negative_extents_are_rejected() {
    let mut m = Markup::new("x");
    m.block("bad", Extent::Px(-1.0));
    assert!(FlowLayout::new(vp()).place(&m, 0.0).is_err());
}

#[test]
fn mounted_section_resolves_names_and_items() {
    let mut m = Markup::new("services");
    m.block("heading", Extent::Px(80.0));
    let grid = m.grid(None, "card", 2, 10.0);
    for i in 0..3 {
        let card = m.child(grid, &i.to_string(), Extent::Px(100.0));
        m.child(card, "title", Extent::Px(20.0));
    }
    let mut stage = Stage::new();
    let mounted = FlowLayout::new(vp()).mount(&mut stage, &m, 0.0).unwrap();
    let heading = mounted.find("heading").unwrap();
    assert_eq!(stage.get(heading).unwrap().key, "services.heading");
    let cards = mounted.items("card");
    assert_eq!(cards.len(), 3);
    assert_eq!(stage.get(cards[2]).unwrap().key, "services.card.2");
    assert!(mounted.find("missing").is_none());
}
