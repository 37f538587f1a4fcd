use super::*;

const ALL_KINDS: [ElementKind; 9] = [
    ElementKind::Dimension,
    ElementKind::Pipe,
    ElementKind::Duct,
    ElementKind::CableTray,
    ElementKind::Conduit,
    ElementKind::FlexDuct,
    ElementKind::FlexPipe,
    ElementKind::Wall,
    ElementKind::Generic,
];

#[test]
fn dimensions_allows_only_dimensions() {
    let filter = SelectionFilter::dimensions();
    for kind in ALL_KINDS {
        let elem = Element::new("e", kind);
        assert_eq!(filter.allows(&elem), kind == ElementKind::Dimension, "{kind:?}");
    }
}

#[test]
fn mep_curves_allow_list() {
    let filter = SelectionFilter::mep_curves();
    for kind in ALL_KINDS {
        let elem = Element::new("e", kind);
        assert_eq!(filter.allows(&elem), kind.is_mep_curve(), "{kind:?}");
    }
    assert_eq!(filter.allowed_kinds().len(), 6);
}

#[test]
fn custom_kinds() {
    let filter = SelectionFilter::kinds([ElementKind::Wall]);
    assert!(filter.allows(&Element::new("w", ElementKind::Wall)));
    assert!(!filter.allows(&Element::new("p", ElementKind::Pipe)));
}

#[test]
fn empty_filter_allows_nothing() {
    let filter = SelectionFilter::kinds(std::iter::empty());
    assert!(!filter.allows(&Element::new("d", ElementKind::Dimension)));
}
