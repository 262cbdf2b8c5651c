use hierc::decl::{DeclarationStore, TypeDeclaration};
use hierc::graph::{GraphError, HierarchyGraph};

fn build(decls: Vec<TypeDeclaration>) -> Result<HierarchyGraph, GraphError> {
    let store = DeclarationStore::from_decls(decls).expect("store build failed");
    HierarchyGraph::build(&store)
}

#[test]
fn edges_mirror_declared_supertypes() {
    let graph = build(vec![
        TypeDeclaration::interface("Animal"),
        TypeDeclaration::interface("Mammal").extends("Animal"),
        TypeDeclaration::class("Person").implements("Mammal"),
    ])
    .unwrap();

    let animal = graph.node(&"Animal".into()).unwrap();
    let mammal = graph.node(&"Mammal".into()).unwrap();
    let person = graph.node(&"Person".into()).unwrap();

    assert!(graph.supertypes_of(animal).is_empty());
    assert_eq!(graph.supertypes_of(mammal), &[animal]);
    assert_eq!(graph.supertypes_of(person), &[mammal]);
}

#[test]
fn superclass_edge_comes_before_interface_edges() {
    let graph = build(vec![
        TypeDeclaration::interface("Walker"),
        TypeDeclaration::class("Base"),
        TypeDeclaration::class("Derived").extends("Base").implements("Walker"),
    ])
    .unwrap();

    let base = graph.node(&"Base".into()).unwrap();
    let walker = graph.node(&"Walker".into()).unwrap();
    let derived = graph.node(&"Derived".into()).unwrap();
    assert_eq!(graph.supertypes_of(derived), &[base, walker]);
}

#[test]
fn unknown_supertype_rejected() {
    let err = build(vec![TypeDeclaration::interface("Mammal").extends("Animal")]).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownSupertype {
            referrer: "Mammal".into(),
            supertype: "Animal".into(),
        }
    );
}

#[test]
fn two_node_cycle_names_both_types() {
    let err = build(vec![
        TypeDeclaration::interface("A").extends("B"),
        TypeDeclaration::interface("B").extends("A"),
    ])
    .unwrap_err();

    match err {
        GraphError::CycleDetected { path } => {
            assert!(path.contains(&"A".into()));
            assert!(path.contains(&"B".into()));
        }
        other => panic!("expected cycle, got {:?}", other),
    }
}

#[test]
fn self_cycle_detected() {
    let err = build(vec![TypeDeclaration::interface("A").extends("A")]).unwrap_err();
    assert_eq!(err, GraphError::CycleDetected { path: vec!["A".into()] });
}

#[test]
fn cycle_report_is_deterministic() {
    let decls = || {
        vec![
            TypeDeclaration::interface("A").extends("B"),
            TypeDeclaration::interface("B").extends("C"),
            TypeDeclaration::interface("C").extends("A"),
        ]
    };
    assert_eq!(build(decls()).unwrap_err(), build(decls()).unwrap_err());
}

#[test]
fn class_cannot_extend_interface() {
    let err = build(vec![
        TypeDeclaration::interface("Animal"),
        TypeDeclaration::class("Person").extends("Animal"),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        GraphError::ClassExtendsInterface { sub: "Person".into(), sup: "Animal".into() }
    );
}

#[test]
fn class_cannot_implement_class() {
    let err = build(vec![
        TypeDeclaration::class("Base"),
        TypeDeclaration::class("Person").implements("Base"),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        GraphError::ClassImplementsClass { sub: "Person".into(), sup: "Base".into() }
    );
}

#[test]
fn interface_cannot_extend_class() {
    let err = build(vec![
        TypeDeclaration::class("Base"),
        TypeDeclaration::interface("Walker").extends("Base"),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        GraphError::InterfaceExtendsClass { sub: "Walker".into(), sup: "Base".into() }
    );
}
