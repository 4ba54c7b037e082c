use super::*;

#[test]
fn throttle_gate_drops_triggers_until_released() {
    let gate = ThrottleGate::new();
    assert!(gate.try_arm());
    assert!(gate.is_armed());
    assert!(!gate.try_arm());
    gate.release();
    assert!(gate.try_arm());
}

#[test]
fn throttle_gate_clones_share_state() {
    let gate = ThrottleGate::new();
    let other = gate.clone();
    assert!(gate.try_arm());
    assert!(!other.try_arm());
    other.release();
    assert!(!gate.is_armed());
}

#[test]
fn cancel_token_is_shared_between_clones() {
    let token = CancelToken::new();
    let loop_side = token.clone();
    assert!(!loop_side.is_cancelled());
    token.cancel();
    assert!(loop_side.is_cancelled());
}

#[test]
fn teardown_runs_tasks_once_in_reverse_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let teardown = Teardown::new();
    for n in 1..=3 {
        let log = Rc::clone(&log);
        teardown.defer(move || log.borrow_mut().push(n));
    }
    assert_eq!(teardown.len(), 3);
    teardown.run();
    teardown.run();
    assert_eq!(*log.borrow(), vec![3, 2, 1]);
    assert!(teardown.is_empty());
}

#[test]
fn teardown_cancels_issued_tokens_and_drops_held_values() {
    let teardown = Teardown::new();
    let token = teardown.token();
    let held = Rc::new(());
    teardown.hold(Rc::clone(&held));
    assert_eq!(Rc::strong_count(&held), 2);
    teardown.run();
    assert!(token.is_cancelled());
    assert_eq!(Rc::strong_count(&held), 1);
}
