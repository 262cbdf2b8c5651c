use hierc::decl::TypeId;
use hierc::{analyze_source, resolve_source, Config, Error, Resolution};

fn resolved(src: &str) -> Resolution {
    resolve_source(src).expect("expected successful resolution")
}

const DUCK: &str = r#"
interface Flyer { void move(); }
interface Swimmer { boolean move(); }
class Duck implements Flyer, Swimmer {
    public void move() {}
}
"#;

// Same method name, incompatible return types, reached through two ancestors
#[test]
fn duck_conflict_lists_both_variants() {
    let r = resolved(DUCK);
    let conflicts = r.conflicts(&"Duck".into()).unwrap();
    assert_eq!(conflicts.len(), 1);

    let conflict = &conflicts[0];
    assert_eq!(conflict.method_name, "move");
    assert_eq!(conflict.variants.len(), 2);

    // Duck's own override contributes the void variant alongside Flyer
    assert_eq!(conflict.variants[0].signature.return_type, "void");
    assert_eq!(
        conflict.variants[0].sources,
        vec![TypeId::from("Flyer"), TypeId::from("Duck")]
    );
    assert_eq!(conflict.variants[1].signature.return_type, "boolean");
    assert_eq!(conflict.variants[1].sources, vec![TypeId::from("Swimmer")]);
}

// Identical signatures from different ancestors are harmless duplication
#[test]
fn identical_diamond_signatures_do_not_conflict() {
    let r = resolved(
        r#"
    interface Animal { void eat(); }
    interface Pet extends Animal { }
    interface Wild extends Animal { }
    class Cat implements Pet, Wild {
        public void eat() {}
    }
    "#,
    );
    assert!(r.conflicts(&"Cat".into()).unwrap().is_empty());
}

// Differing parameter lists under one name are reported as a conflict too
#[test]
fn parameter_shape_mismatch_conflicts() {
    let r = resolved(
        r#"
    interface Scale { void weigh(int grams); }
    interface Balance { void weigh(long grams); }
    interface Instrument extends Scale, Balance { }
    "#,
    );

    let conflicts = r.conflicts(&"Instrument".into()).unwrap();
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].method_name, "weigh");
}

// Running detection twice over the same graph yields identical ordered output
#[test]
fn conflict_reports_are_deterministic() {
    let first = resolved(DUCK).conflicts(&"Duck".into()).unwrap();
    let second = resolved(DUCK).conflicts(&"Duck".into()).unwrap();
    assert_eq!(first, second);
}

// Conflicts stay advisory unless strict mode is requested
#[test]
fn strict_mode_escalates_conflicts() {
    assert!(analyze_source(DUCK, &Config::default()).is_ok());
    match analyze_source(DUCK, &Config::strict()) {
        Err(Error::StrictConflicts { count }) => assert_eq!(count, 1),
        other => panic!("expected strict failure, got {:?}", other.map(|_| ())),
    }
}
