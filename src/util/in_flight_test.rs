use super::*;

#[test]
fn second_begin_is_refused_while_guard_lives() {
    let flight = InFlight::default();
    let guard = flight.begin();
    assert!(guard.is_some());
    assert!(flight.begin().is_none());
    drop(guard);
    assert!(flight.begin().is_some());
}

#[test]
fn slot_reopens_after_guard_drops() {
    let flight = InFlight::default();
    {
        let _guard = flight.begin().unwrap();
    }
    assert!(flight.begin().is_some());
}
