use hierc::decl::{MethodSignature, TypeId};
use hierc::{resolve_source, Resolution};

fn resolved(src: &str) -> Resolution {
    resolve_source(src).expect("expected successful resolution")
}

fn check_err(src: &str, id: &str, needle: &str) {
    let mut r = resolved(src);
    let err = r.check(&id.into()).unwrap_err().to_string();
    assert!(err.contains(needle), "{}", err);
}

const FIXTURE: &str = r#"
interface Animal { void eat(); }
interface Mammal extends Animal { void move(); }
public class Person implements Mammal {
    public void eat() {}
    public void move() {}
}
class Robot implements Mammal {
    public void move() {}
}
"#;

#[test]
fn person_satisfies_all_obligations() {
    let mut r = resolved(FIXTURE);
    let report = r.check(&"Person".into()).unwrap();
    assert!(report.is_satisfied());
    assert!(report.missing.is_empty());
}

#[test]
fn robot_reports_exactly_the_missing_obligation() {
    let mut r = resolved(FIXTURE);
    let report = r.check(&"Robot".into()).unwrap();
    assert!(!report.is_satisfied());
    assert_eq!(report.missing.len(), 1);
    assert_eq!(report.missing[0].signature, MethodSignature::nullary("eat", "void"));
    assert_eq!(report.missing[0].sources, vec![TypeId::from("Animal")]);
}

// Implementations inherited from an ancestor class count as provided
#[test]
fn superclass_implementation_satisfies_obligation() {
    let mut r = resolved(
        r#"
    interface Greeter { void greet(); }
    class Base implements Greeter {
        public void greet() {}
    }
    class Derived extends Base { }
    "#,
    );
    assert!(r.check(&"Derived".into()).unwrap().is_satisfied());
}

// Interfaces never provide, even when the signature matches
#[test]
fn interface_requirements_do_not_provide() {
    let mut r = resolved(
        r#"
    interface Animal { void eat(); }
    interface Mammal extends Animal { void eat(); }
    class Robot implements Mammal { }
    "#,
    );
    let report = r.check(&"Robot".into()).unwrap();
    assert_eq!(report.missing.len(), 1);
}

#[test]
fn interfaces_cannot_be_checked() {
    check_err(FIXTURE, "Mammal", "not a concrete type");
}

#[test]
fn unknown_type_cannot_be_checked() {
    check_err(FIXTURE, "Ghost", "unknown type");
}
