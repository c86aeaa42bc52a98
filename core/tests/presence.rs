use std::cell::{Cell, RefCell};

use presence_core::{branch_on_presence, run_if_absent, run_if_present, OptionPresenceExt};

const VALUES: [i32; 6] = [i32::MIN, -1, 0, 1, 42, i32::MAX];

#[test]
fn present_values_run_present_handler_once() {
  for v in VALUES {
    let seen = RefCell::new(Vec::new());
    run_if_present(Some(v), |x| seen.borrow_mut().push(x));
    assert_eq!(*seen.borrow(), vec![v]);

    let absent_calls = Cell::new(0);
    run_if_absent(Some(v), || absent_calls.set(absent_calls.get() + 1));
    assert_eq!(absent_calls.get(), 0);
  }
}

#[test]
fn absent_value_runs_absent_handler_once() {
  let present_calls = Cell::new(0);
  run_if_present(None::<i32>, |_| present_calls.set(present_calls.get() + 1));
  assert_eq!(present_calls.get(), 0);

  let absent_calls = Cell::new(0);
  run_if_absent(None::<i32>, || absent_calls.set(absent_calls.get() + 1));
  assert_eq!(absent_calls.get(), 1);
}

#[test]
fn branch_on_present_value_equals_present_handler() {
  let present = |x: i32| x.wrapping_mul(3);
  for v in VALUES {
    let absent_calls = Cell::new(0);
    let result = branch_on_presence(Some(v), present).otherwise(|| {
      absent_calls.set(absent_calls.get() + 1);
      0
    });
    assert_eq!(result, present(v));
    assert_eq!(absent_calls.get(), 0);
  }
}

#[test]
fn branch_on_absent_value_equals_absent_handler() {
  let present_calls = Cell::new(0);
  let result = branch_on_presence(None::<i32>, |x| {
    present_calls.set(present_calls.get() + 1);
    x
  }).otherwise(|| -1);
  assert_eq!(result, -1);
  assert_eq!(present_calls.get(), 0);
}

#[test]
fn unresolved_branch_has_no_effect() {
  let calls = Cell::new(0);
  let _ = Some("value").branch_on_presence(|_| calls.set(calls.get() + 1));
  let _ = None::<&str>.branch_on_presence(|_| calls.set(calls.get() + 1));
  assert_eq!(calls.get(), 0);
}

#[test]
fn method_and_function_forms_agree() {
  for value in [Some("a"), Some("abc"), None] {
    let by_method = value.branch_on_presence(str::len).otherwise(|| usize::MAX);
    let by_function = branch_on_presence(value, str::len).otherwise(|| usize::MAX);
    assert_eq!(by_method, by_function);
  }
}

#[test]
#[should_panic(expected = "present handler failed")]
fn present_handler_panic_propagates() {
  run_if_present(Some(1), |_| -> () { panic!("present handler failed") });
}
