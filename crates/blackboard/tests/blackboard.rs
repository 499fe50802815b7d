use std::cell::RefCell;
use std::rc::Rc;

use blackboard::{Blackboard, BlackboardError, Value, ValueType, Vector2, Vector3Int};

#[test]
fn blackboard_set_get_remove_roundtrip() {
    let mut bb = Blackboard::new();
    let hp = bb.get_or_register_key("hp").unwrap();
    let name = bb.get_or_register_key("name").unwrap();
    assert!(!bb.contains_key(&hp));

    bb.set_value(&hp, 123_i32);
    bb.set_value(&name, "hello".to_string());

    assert_eq!(bb.try_get_value::<i32>(&hp), Some(123));
    assert_eq!(bb.try_get_value::<String>(&name).as_deref(), Some("hello"));
    assert_eq!(bb.len(), 2);

    assert_eq!(bb.remove(&hp), Some(Value::Int(123)));
    assert!(!bb.contains_key(&hp));
    assert_eq!(bb.try_get_value::<i32>(&hp), None);
    assert_eq!(bb.remove(&hp), None);
}

#[test]
fn type_mismatch_is_a_normal_miss() {
    let mut bb = Blackboard::new();
    let key = bb.get_or_register_key("speed").unwrap();
    bb.set_value(&key, 4.5_f32);

    assert_eq!(bb.try_get_value::<f32>(&key), Some(4.5));
    assert_eq!(bb.try_get_value::<i32>(&key), None);
    assert_eq!(bb.get_value_or_default::<i32>(&key), (0, false));
    assert_eq!(bb.get_value_or_default::<bool>(&key), (false, false));
    assert_eq!(bb.get_value_or_default::<f32>(&key), (4.5, true));
}

#[test]
fn strict_read_reports_missing_and_mismatched_keys() {
    let mut bb = Blackboard::new();
    let key = bb.get_or_register_key("target").unwrap();

    assert_eq!(
        bb.get_value::<Vector2>(&key),
        Err(BlackboardError::MissingKey("target".to_string()))
    );

    bb.set_value(&key, Vector3Int::new(1, 2, 3));
    assert_eq!(
        bb.get_value::<Vector2>(&key),
        Err(BlackboardError::TypeMismatch {
            key: "target".to_string(),
            expected: ValueType::Vector2,
            actual: ValueType::Vector3Int,
        })
    );
    assert_eq!(bb.get_value::<Vector3Int>(&key), Ok(Vector3Int::new(1, 2, 3)));
}

#[test]
fn last_write_wins_including_its_type() {
    let mut bb = Blackboard::new();
    let key = bb.get_or_register_key("slot").unwrap();

    bb.set_value(&key, true);
    bb.set_value(&key, 7_i32);

    assert_eq!(bb.value_type(&key), Some(ValueType::Int));
    assert_eq!(bb.try_get_value::<bool>(&key), None);
    assert_eq!(bb.try_get_value::<i32>(&key), Some(7));
    assert_eq!(bb.len(), 1);
}

#[test]
fn clear_drops_entries_but_keeps_registered_keys() {
    let mut bb = Blackboard::new();
    let key = bb.get_or_register_key("a").unwrap();
    bb.set_value(&key, 1_i32);

    bb.clear();

    assert!(bb.is_empty());
    assert_eq!(bb.lookup_key("a"), Some(key));
}

#[test]
fn actions_drain_in_enqueue_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut bb = Blackboard::new();

    for name in ["a1", "a2", "a3"] {
        let log = log.clone();
        bb.add_action(move || log.borrow_mut().push(name));
    }
    assert_eq!(bb.pending_actions(), 3);

    let actions = bb.take_actions();
    assert_eq!(bb.pending_actions(), 0);
    assert!(log.borrow().is_empty());

    actions.into_iter().for_each(|action| action());
    assert_eq!(*log.borrow(), vec!["a1", "a2", "a3"]);
}

#[test]
fn clear_actions_discards_without_running() {
    let ran = Rc::new(RefCell::new(false));
    let mut bb = Blackboard::new();
    {
        let ran = ran.clone();
        bb.add_boxed_action(Box::new(move || *ran.borrow_mut() = true));
    }

    bb.clear_actions();

    assert_eq!(bb.pending_actions(), 0);
    assert!(bb.take_actions().is_empty());
    assert!(!*ran.borrow());
}

#[test]
fn describe_all_uses_each_entry_self_description() {
    let mut bb = Blackboard::new();
    let health = bb.get_or_register_key("Health").unwrap();
    let alive = bb.get_or_register_key("IsAlive").unwrap();
    let facing = bb.get_or_register_key("Facing").unwrap();

    bb.set_value(&health, 75.0_f32);
    bb.set_value(&alive, true);
    bb.set_value(&facing, Vector2::new(1.0, -0.5));

    let described = bb
        .describe_all()
        .into_iter()
        .map(|(key, value)| (key.name().to_string(), value))
        .collect::<Vec<_>>();

    assert_eq!(described.len(), 3);
    assert!(described.contains(&("Health".to_string(), "75".to_string())));
    assert!(described.contains(&("IsAlive".to_string(), "true".to_string())));
    assert!(described.contains(&("Facing".to_string(), "(1.00, -0.50)".to_string())));

    // Enumeration order is by key hash, not insertion order.
    let hashes = bb.describe_all().iter().map(|(k, _)| k.id()).collect::<Vec<_>>();
    let mut sorted = hashes.clone();
    sorted.sort_unstable();
    assert_eq!(hashes, sorted);
}

#[test]
fn truncate_actions_keeps_the_oldest() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut bb = Blackboard::new();
    for name in ["kept", "dropped1", "dropped2"] {
        let log = log.clone();
        bb.add_action(move || log.borrow_mut().push(name));
    }

    bb.truncate_actions(1);
    bb.truncate_actions(5);

    bb.take_actions().into_iter().for_each(|action| action());
    assert_eq!(*log.borrow(), vec!["kept"]);
}
