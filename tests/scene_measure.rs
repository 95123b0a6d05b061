//! End-to-end measurement and placement through the in-memory provider.
//!
//! Run with logs: cargo test --features tracing --test scene_measure -- --nocapture

use boxplace::metrics::{BoxMetrics, Insets, PositionMode, Sides, ViewportMetrics};
use boxplace::scene::{Node, NodeId, Scene};
use boxplace::{
    AlignmentCode, Collision, CollisionPolicy, Edge, MeasureError, Offset, OffsetParent, OffsetValue,
    PlaceRequest, Rect, Region, Subject, distance, intersection, offset_parent, overlap, place, rect,
    width,
};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn viewport() -> ViewportMetrics {
    ViewportMetrics {
        inner_width: 1280.0,
        inner_height: 720.0,
        client_width: 1265.0,
        client_height: 720.0,
        scroll_x: 0.0,
        scroll_y: 1000.0,
    }
}

/// Root, body, and a scrolling panel holding a relatively positioned card.
struct Page {
    scene: Scene,
    root: NodeId,
    panel: NodeId,
    card: NodeId,
}

fn page() -> Page {
    let mut scene = Scene::new(viewport());
    let root = scene.insert_root(BoxMetrics {
        border_box: Rect::new(0.0, 0.0, 1265.0, 3000.0),
        client_width: 1265.0,
        client_height: 720.0,
        scroll_width: 1265.0,
        scroll_height: 3000.0,
        ..BoxMetrics::default()
    });
    let body = scene.insert(
        Node::new(BoxMetrics {
            border_box: Rect::new(8.0, 8.0, 1249.0, 2984.0),
            client_width: 1249.0,
            client_height: 2984.0,
            scroll_width: 1249.0,
            scroll_height: 2984.0,
            margin: Sides::uniform(8.0),
            ..BoxMetrics::default()
        })
        .child_of(root),
    );
    scene.set_body(body);

    // 400x300 panel with a 17px vertical scrollbar
    let panel = scene.insert(
        Node::new(BoxMetrics {
            border_box: Rect::new(100.25, 1200.5, 400.0, 300.0),
            client_width: 400.0 - 2.0 - 17.0,
            client_height: 300.0 - 2.0,
            scroll_width: 381.0,
            scroll_height: 900.0,
            padding: Sides::symmetric(12.0, 16.0),
            border: Sides::uniform(1.0),
            margin: Sides::uniform(20.0),
            position: PositionMode::Relative,
            ..BoxMetrics::default()
        })
        .child_of(body),
    );
    let card = scene.insert(
        Node::new(BoxMetrics {
            border_box: Rect::new(121.25, 1218.5, 200.0, 80.0),
            client_width: 196.0,
            client_height: 76.0,
            padding: Sides::uniform(6.0),
            border: Sides::uniform(2.0),
            margin: Sides::symmetric(4.0, 0.0),
            ..BoxMetrics::default()
        })
        .child_of(panel),
    );
    Page { scene, root, panel, card }
}

#[test]
fn edge_measurements_grow_monotonically() {
    init_tracing();
    let p = page();
    for el in [p.root, p.panel, p.card] {
        let widths: Vec<f64> = Edge::ALL
            .iter()
            .map(|&edge| width(&p.scene, &Subject::Element(el), edge).unwrap())
            .collect();
        for pair in widths.windows(2) {
            assert!(pair[0] <= pair[1], "{el}: widths not monotonic: {widths:?}");
        }
    }
}

#[test]
fn panel_rect_per_edge() {
    let p = page();
    let panel = Subject::Element(p.panel);
    assert_eq!(rect(&p.scene, &panel, Edge::Border).unwrap(), Rect::new(100.25, 1200.5, 400.0, 300.0));
    assert_eq!(rect(&p.scene, &panel, Edge::Margin).unwrap(), Rect::new(80.25, 1180.5, 440.0, 340.0));
    assert_eq!(rect(&p.scene, &panel, Edge::Scroll).unwrap(), Rect::new(101.25, 1201.5, 398.0, 298.0));
    assert_eq!(rect(&p.scene, &panel, Edge::Padding).unwrap(), Rect::new(101.25, 1201.5, 381.0, 298.0));
    assert_eq!(rect(&p.scene, &panel, Edge::Content).unwrap(), Rect::new(117.25, 1213.5, 349.0, 274.0));
}

#[test]
fn window_and_document() {
    let p = page();
    let window = rect(&p.scene, &Subject::Window, Edge::Content).unwrap();
    assert_eq!(window, Rect::new(0.0, 1000.0, 1265.0, 720.0));

    let doc = rect(&p.scene, &Subject::Document, Edge::Scroll).unwrap();
    assert_eq!(doc, Rect::new(0.0, 0.0, 1280.0, 3000.0));
}

#[test]
fn self_relations() {
    let p = page();
    let card = Region::element(p.card);
    let measured = boxplace::measure(&p.scene, &card).unwrap();
    assert_eq!(intersection(&p.scene, &card, &card).unwrap(), Some(measured));
    assert_eq!(distance(&p.scene, &card, &card).unwrap(), -1.0);
}

#[test]
fn horizontal_gap_between_rects() {
    let p = page();
    let a = Region::rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = Region::rect(Rect::new(42.5, 3.0, 10.0, 4.0));
    assert_eq!(distance(&p.scene, &a, &b).unwrap(), 32.5);
    assert_eq!(intersection(&p.scene, &a, &b).unwrap(), None);
}

#[test]
fn card_overlap_with_panel_content() {
    let p = page();
    let o = overlap(
        &p.scene,
        &Region::element(p.card),
        &Region::element(p.panel).at(Edge::Content),
    )
    .unwrap();
    assert_eq!(o.left, 121.25 - 117.25);
    assert_eq!(o.top, 1218.5 - 1213.5);
    assert_eq!(o.right, (117.25 + 349.0) - (121.25 + 200.0));
    assert_eq!(o.bottom, (1213.5 + 274.0) - (1218.5 + 80.0));
}

#[test]
fn offset_parents() {
    let mut p = page();
    assert_eq!(offset_parent(&p.scene, &p.card).unwrap(), Some(OffsetParent::Element(p.panel)));
    assert_eq!(offset_parent(&p.scene, &p.panel).unwrap(), None);

    let fixed = p.scene.insert(
        Node::new(BoxMetrics { position: PositionMode::Fixed, ..BoxMetrics::default() }).child_of(p.card),
    );
    assert_eq!(offset_parent(&p.scene, &fixed).unwrap(), Some(OffsetParent::Window));
}

#[test]
fn center_on_element_anchor() {
    init_tracing();
    let mut p = page();
    let anchor = p.scene.insert(Node::new(BoxMetrics {
        border_box: Rect::new(10.0, 10.0, 200.0, 100.0),
        ..BoxMetrics::default()
    }));
    let tip = p.scene.insert(Node::new(BoxMetrics {
        border_box: Rect::new(0.0, 0.0, 50.0, 50.0),
        position: PositionMode::Absolute,
        ..BoxMetrics::default()
    }));
    let request = PlaceRequest::new(Region::element(anchor))
        .my(AlignmentCode::CENTER)
        .at(AlignmentCode::CENTER);
    assert_eq!(place(&p.scene, &tip, Edge::Border, &request).unwrap(), Offset::new(85.0, 35.0));
}

#[test]
fn absolute_dropdown_under_card_inside_panel() {
    let mut p = page();
    let dropdown = p.scene.insert(
        Node::new(BoxMetrics {
            border_box: Rect::new(0.0, 0.0, 120.0, 60.0),
            position: PositionMode::Absolute,
            ..BoxMetrics::default()
        })
        .child_of(p.card),
    );
    let request = PlaceRequest::new(Region::element(p.card))
        .at(AlignmentCode::new(boxplace::Align::Start, boxplace::Align::End));
    let pos = place(&p.scene, &dropdown, Edge::Border, &request).unwrap();
    // card bottom-left, relative to the panel's padding edge
    assert_eq!(pos, Offset::new(121.25 - 101.25, 1298.5 - 1201.5));
}

#[test]
fn fixed_toast_follows_scroll_and_stays_in_window() {
    let mut p = page();
    let toast = p.scene.insert(
        Node::new(BoxMetrics {
            border_box: Rect::new(0.0, 0.0, 300.0, 50.0),
            position: PositionMode::Fixed,
            ..BoxMetrics::default()
        })
        .child_of(p.card),
    );
    // Anchored below the bottom right of the viewport, pushed back in.
    let request = PlaceRequest::new(Region::window())
        .my(AlignmentCode::LEFT_TOP)
        .at(AlignmentCode::RIGHT_BOTTOM)
        .within(Region::window(), CollisionPolicy::uniform(Collision::Push));
    let pos = place(&p.scene, &toast, Edge::Border, &request).unwrap();
    assert_eq!(pos, Offset::new(1280.0 - 300.0, 720.0 - 50.0));
}

#[test]
fn relative_target_undoes_its_insets() {
    let mut p = page();
    let badge = p.scene.insert(
        Node::new(BoxMetrics {
            border_box: Rect::new(300.0, 1300.0, 20.0, 20.0),
            position: PositionMode::Relative,
            insets: Insets { right: Some(10.0), top: Some(5.0), ..Insets::default() },
            ..BoxMetrics::default()
        })
        .child_of(p.panel),
    );
    let request = PlaceRequest::new(Region::rect(Rect::new(300.0, 1300.0, 1.0, 1.0)));
    let pos = place(&p.scene, &badge, Edge::Border, &request).unwrap();
    // static position is (310, 1295); reaching (300, 1300) needs these insets
    assert_eq!(pos, Offset::new(-10.0, 5.0));
}

#[test]
fn force_push_end_takes_priority() {
    let mut p = page();
    let wide = p.scene.insert(Node::new(BoxMetrics {
        border_box: Rect::new(0.0, 0.0, 150.0, 10.0),
        position: PositionMode::Absolute,
        ..BoxMetrics::default()
    }));
    let container = Region::rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    let policy = CollisionPolicy {
        left: Collision::Push,
        right: Collision::ForcePush,
        top: Collision::None,
        bottom: Collision::None,
    };
    let request = PlaceRequest::new(Region::rect(Rect::new(-10.0, 0.0, 0.0, 0.0))).within(container, policy);
    let pos = place(&p.scene, &wide, Edge::Border, &request).unwrap();
    let placed = Rect::new(pos.left, pos.top, 150.0, 10.0);
    let o = boxplace::spatial::overlap(&placed, &Rect::new(0.0, 0.0, 100.0, 100.0));
    assert_eq!(o.right, 0.0);
    assert!(o.left < 0.0);
}

#[test]
fn percent_offset_equals_pixels() {
    let mut p = page();
    let target = p.scene.insert(Node::new(BoxMetrics {
        border_box: Rect::new(0.0, 0.0, 40.0, 40.0),
        position: PositionMode::Absolute,
        ..BoxMetrics::default()
    }));
    let anchor = Region::rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    let pct = PlaceRequest::new(anchor.clone()).offset(OffsetValue::Percent(50.0), 0.0);
    let px = PlaceRequest::new(anchor).offset(20.0, 0.0);
    assert_eq!(
        place(&p.scene, &target, Edge::Border, &pct).unwrap(),
        place(&p.scene, &target, Edge::Border, &px).unwrap()
    );
}

#[test]
fn detached_elements_are_errors_not_zeroes() {
    let mut p = page();
    p.scene.detach(p.panel);
    let err = rect(&p.scene, &Subject::Element(p.card), Edge::Border).unwrap_err();
    assert!(matches!(err, MeasureError::Detached { .. }));
    assert!(place(&p.scene, &p.card, Edge::Border, &PlaceRequest::default()).is_err());
}
