//! Unit tests for wrapping, binding, composing, applying and unpacking
//! through the named methods.

use std::cell::RefCell;
use std::rc::Rc;

use exotic::builtins::apply;
use exotic::prelude::*;
use rstest::rstest;

fn collect() -> Exotic {
    exotic(|arguments| Ok(arguments.iter().cloned().collect()))
}

fn divide() -> Exotic {
    exotic(|arguments| {
        let [numerator, denominator] = arity::<2>(arguments)?;
        let numerator = f64::try_from(numerator.clone())?;
        let denominator = f64::try_from(denominator.clone())?;
        if denominator == 0.0 {
            return Err(ExoticError::raised("division by zero"));
        }
        Ok(Value::from(numerator / denominator))
    })
}

// =============================================================================
// Wrap
// =============================================================================

#[rstest]
fn wrap_function_value_succeeds() {
    let wrapper = collect();
    let unwrapped = Exotic::try_from(Value::from(&wrapper)).unwrap();
    assert_eq!(unwrapped, wrapper);
    assert_eq!(unwrapped.apply(1), Ok(Value::from(vec![1])));
}

#[rstest]
#[case::unit(Value::Unit)]
#[case::bool(Value::from(true))]
#[case::int(Value::from(42))]
#[case::float(Value::from(1.5))]
#[case::str(Value::from("print"))]
#[case::list(Value::from(vec![1, 2]))]
fn wrap_non_function_fails(#[case] value: Value) {
    assert_eq!(
        Exotic::try_from(value.clone()),
        Err(ExoticError::NotCallable { value })
    );
}

// =============================================================================
// Bind and Apply
// =============================================================================

#[rstest]
fn bind_appends_in_order() {
    let wrapper = collect().bind(1).bind("two").bind(3.0);
    assert_eq!(
        wrapper.bound(),
        &[Value::from(1), Value::from("two"), Value::from(3.0)]
    );
}

#[rstest]
fn apply_passes_collection_as_single_argument() {
    assert_eq!(
        collect().apply(vec![1, 2]),
        Ok(Value::from(vec![Value::from(vec![1, 2])]))
    );
}

#[rstest]
fn apply_runs_callable_exactly_once() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&calls);
    let recorder = exotic(move |arguments| {
        log.borrow_mut().push(arguments.to_vec());
        Ok(Value::Unit)
    });

    let bound = recorder.bind("a");
    assert!(calls.borrow().is_empty());

    assert_eq!(bound.apply("b"), Ok(Value::Unit));
    assert_eq!(
        *calls.borrow(),
        vec![vec![Value::from("a"), Value::from("b")]]
    );
}

#[rstest]
#[case(10.0, 4.0, 2.5)]
#[case(-9.0, 3.0, -3.0)]
#[case(1.0, 8.0, 0.125)]
fn bind_then_apply(#[case] numerator: f64, #[case] denominator: f64, #[case] expected: f64) {
    assert_eq!(
        divide().bind(numerator).apply(denominator),
        Ok(Value::from(expected))
    );
}

#[rstest]
fn callable_error_is_returned_unchanged() {
    assert_eq!(
        divide().bind(1.0).apply(0.0),
        Err(ExoticError::raised("division by zero"))
    );
}

#[rstest]
fn arity_error_from_callable_is_returned_unchanged() {
    assert_eq!(
        divide().apply(1.0),
        Err(ExoticError::Arity {
            expected: 2,
            found: 1
        })
    );
}

#[rstest]
fn type_error_from_callable_is_returned_unchanged() {
    assert_eq!(
        divide().bind("ten").apply(2),
        Err(ExoticError::Type {
            expected: "float",
            found: Value::from("ten")
        })
    );
}

#[rstest]
fn call_uses_bound_arguments_only() {
    assert_eq!(divide().bind(9).bind(3).call(), Ok(Value::from(3.0)));
}

// =============================================================================
// Compose
// =============================================================================

#[rstest]
fn compose_runs_right_operand_first() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let record = |name: &'static str| {
        let order = Rc::clone(&order);
        exotic(move |arguments| {
            order.borrow_mut().push(name);
            Ok(arguments[0].clone())
        })
    };

    let composed = record("outer").compose(record("middle")).compose(record("inner"));
    assert_eq!(composed.apply(0), Ok(Value::from(0)));
    assert_eq!(*order.borrow(), vec!["inner", "middle", "outer"]);
}

#[rstest]
fn compose_error_in_inner_skips_outer() {
    let reached = Rc::new(RefCell::new(false));
    let flag = Rc::clone(&reached);
    let outer = exotic(move |_| {
        *flag.borrow_mut() = true;
        Ok(Value::Unit)
    });

    let result = outer.compose(divide().bind(1)).apply(0);
    assert_eq!(result, Err(ExoticError::raised("division by zero")));
    assert!(!*reached.borrow());
}

#[rstest]
fn compose_marks_wrapper_as_composed() {
    assert!(collect().compose(collect()).is_composed());
    assert!(!collect().bind(1).is_composed());
}

#[rstest]
fn compose_with_function_value() {
    let inner = Exotic::try_from(Value::from(divide().bind(8))).unwrap();
    assert_eq!(
        collect().compose(inner).apply(2),
        Ok(Value::from(vec![4.0]))
    );
}

// =============================================================================
// Unpack
// =============================================================================

#[rstest]
fn unpack_spreads_list_into_arguments() {
    assert_eq!(divide().unpack().apply(vec![6, 4]), Ok(Value::from(1.5)));
}

#[rstest]
fn unpack_spreads_string_into_characters() {
    assert_eq!(
        collect().unpack().apply("abc"),
        Ok(Value::from(vec!["a", "b", "c"]))
    );
}

#[rstest]
fn unpack_evaluates_thunk_before_spreading() {
    let thunk = collect().bind(6).bind(3);
    assert_eq!(divide().unpack().apply(thunk), Ok(Value::from(2.0)));
}

#[rstest]
#[case::unit(Value::Unit)]
#[case::bool(Value::from(false))]
#[case::int(Value::from(1))]
#[case::float(Value::from(0.5))]
fn unpack_rejects_non_iterable(#[case] value: Value) {
    assert_eq!(
        collect().unpack().apply(value.clone()),
        Err(ExoticError::NotIterable {
            value: value.clone()
        })
    );
    assert_eq!(
        collect().unpack().bind(value.clone()),
        Err(ExoticError::NotIterable { value })
    );
}

#[rstest]
fn unpack_applies_to_next_step_only() {
    let wrapper = collect().unpack().bind_all(["a", "b"]).bind(vec!["c", "d"]);
    assert_eq!(
        wrapper.call(),
        Ok(Value::from(vec![
            Value::from("a"),
            Value::from("b"),
            Value::from(vec!["c", "d"])
        ]))
    );
}

#[rstest]
fn unpack_does_not_touch_source() {
    let source = collect().bind(0);
    let _spread = source.unpack().bind(vec![1, 2]);
    assert_eq!(source.bound(), &[Value::from(0)]);
}

// =============================================================================
// Builtins
// =============================================================================

#[rstest]
fn identity_returns_argument() {
    assert_eq!(identity().apply("x"), Ok(Value::from("x")));
}

#[rstest]
fn apply_builtin_calls_function_argument() {
    assert_eq!(
        apply().bind(divide()).bind(10).apply(4),
        Ok(Value::from(2.5))
    );
}

#[rstest]
fn apply_builtin_propagates_errors() {
    assert_eq!(
        apply().bind(divide()).bind(1).apply(0),
        Err(ExoticError::raised("division by zero"))
    );
}
