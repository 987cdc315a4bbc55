#[cfg(test)]
mod tests {
    use super::super::events::ChangeEvent;
    use super::super::unit_value::{ControllerError, UnitValueController};
    use crate::config::ControllerConfig;
    use crate::edit::{CommitOutcome, RevertReason};
    use crate::units::Unit;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_controller(
        config: ControllerConfig,
    ) -> (UnitValueController, Rc<RefCell<Vec<ChangeEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let controller = UnitValueController::new(config)
            .unwrap()
            .with_observer(move |event| sink.borrow_mut().push(*event));
        (controller, events)
    }

    fn type_and_blur(controller: &mut UnitValueController, text: &str) -> Option<ChangeEvent> {
        controller.focus();
        controller.input(text);
        controller.blur()
    }

    #[test]
    fn test_initial_state() {
        let controller = UnitValueController::default();
        assert_eq!(controller.value(), 0.0);
        assert_eq!(controller.unit(), Unit::Percent);
        assert_eq!(controller.text(), "0");
        assert!(!controller.is_editing());
        assert!(controller.is_decrement_disabled());
        assert!(!controller.is_increment_disabled());
    }

    #[test]
    fn test_comma_entry_commits_decimal() {
        let (mut controller, events) = recording_controller(ControllerConfig::default());

        let event = type_and_blur(&mut controller, "12,3");

        assert_eq!(event, Some(ChangeEvent::new(12.3, Unit::Percent)));
        assert_eq!(*events.borrow(), vec![ChangeEvent::new(12.3, Unit::Percent)]);
        assert_eq!(controller.text(), "12.3");
    }

    #[test]
    fn test_multi_dot_entry_reverts() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "50");

        let event = type_and_blur(&mut controller, "12.4.5");

        assert_eq!(event, Some(ChangeEvent::new(50.0, Unit::Percent)));
        assert_eq!(controller.text(), "50");
    }

    #[test]
    fn test_leading_garbage_reverts_trailing_garbage_is_dropped() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "50");

        assert_eq!(
            type_and_blur(&mut controller, "a123"),
            Some(ChangeEvent::new(50.0, Unit::Percent))
        );
        assert_eq!(
            type_and_blur(&mut controller, "12a3"),
            Some(ChangeEvent::new(12.0, Unit::Percent))
        );
    }

    #[test]
    fn test_negative_clamps_but_percent_overflow_reverts() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "10");
        assert_eq!(
            type_and_blur(&mut controller, "-5"),
            Some(ChangeEvent::new(0.0, Unit::Percent))
        );

        type_and_blur(&mut controller, "50");
        controller.focus();
        controller.input("150");
        let result = controller.blur_with_result().unwrap();
        assert_eq!(result.value, 50.0);
        assert_eq!(
            result.outcome,
            CommitOutcome::Reverted(RevertReason::OutOfRangeOnCommit)
        );
        assert_eq!(controller.value(), 50.0);
    }

    #[test]
    fn test_switch_to_percent_clamps_large_pixel_value() {
        let (mut controller, events) = recording_controller(ControllerConfig::default());
        controller.set_unit(Unit::Pixel);
        type_and_blur(&mut controller, "500");
        events.borrow_mut().clear();

        let event = controller.set_unit(Unit::Percent);

        assert_eq!(event, Some(ChangeEvent::new(100.0, Unit::Percent)));
        assert_eq!(*events.borrow(), vec![ChangeEvent::new(100.0, Unit::Percent)]);
        assert_eq!(controller.text(), "100");
    }

    #[test]
    fn test_switch_to_percent_keeps_small_value() {
        let mut controller = UnitValueController::default();
        controller.set_unit(Unit::Pixel);
        type_and_blur(&mut controller, "50");

        assert_eq!(
            controller.set_unit(Unit::Percent),
            Some(ChangeEvent::new(50.0, Unit::Percent))
        );
    }

    #[test]
    fn test_switch_from_initial_state_emits_zero_pixels() {
        let mut controller = UnitValueController::default();
        assert_eq!(
            controller.set_unit(Unit::Pixel),
            Some(ChangeEvent::new(0.0, Unit::Pixel))
        );
    }

    #[test]
    fn test_reselecting_unit_is_silent() {
        let (mut controller, events) = recording_controller(ControllerConfig::default());
        type_and_blur(&mut controller, "40");
        events.borrow_mut().clear();

        assert_eq!(controller.set_unit(Unit::Percent), None);
        assert!(events.borrow().is_empty());
        assert_eq!(controller.value(), 40.0);
    }

    #[test]
    fn test_increment_disabled_at_one_hundred_percent() {
        let (mut controller, events) = recording_controller(ControllerConfig::default());
        type_and_blur(&mut controller, "100");
        events.borrow_mut().clear();

        assert!(controller.is_increment_disabled());
        assert_eq!(controller.increment(), None);
        assert!(events.borrow().is_empty());
        assert_eq!(controller.value(), 100.0);
    }

    #[test]
    fn test_pixel_increment_is_never_disabled() {
        let mut controller = UnitValueController::default();
        controller.set_unit(Unit::Pixel);
        type_and_blur(&mut controller, "1000");

        assert!(!controller.is_increment_disabled());
        assert_eq!(
            controller.increment(),
            Some(ChangeEvent::new(1001.0, Unit::Pixel))
        );
        assert_eq!(controller.text(), "1001");
    }

    #[test]
    fn test_stepping_by_one() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "50");

        assert_eq!(
            controller.increment(),
            Some(ChangeEvent::new(51.0, Unit::Percent))
        );
        assert_eq!(
            controller.decrement(),
            Some(ChangeEvent::new(50.0, Unit::Percent))
        );
        assert_eq!(
            controller.decrement(),
            Some(ChangeEvent::new(49.0, Unit::Percent))
        );
    }

    #[test]
    fn test_stepping_clamps_to_bounds() {
        let config = ControllerConfig::default().with_step(5.0);
        let mut controller = UnitValueController::new(config).unwrap();
        type_and_blur(&mut controller, "98");
        assert_eq!(controller.increment().map(|e| e.value), Some(100.0));

        type_and_blur(&mut controller, "2");
        assert_eq!(controller.decrement().map(|e| e.value), Some(0.0));
        assert!(controller.is_decrement_disabled());
        assert_eq!(controller.decrement(), None);
    }

    #[test]
    fn test_step_updates_revert_target() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "10");
        controller.increment();

        assert_eq!(
            type_and_blur(&mut controller, "nope"),
            Some(ChangeEvent::new(11.0, Unit::Percent))
        );
    }

    #[test]
    fn test_editing_shields_text_from_external_changes() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "20");

        controller.focus();
        controller.input("3");
        controller.set_value(70.0).unwrap();

        assert_eq!(controller.value(), 70.0);
        assert_eq!(controller.text(), "3");
        assert_eq!(
            controller.blur(),
            Some(ChangeEvent::new(3.0, Unit::Percent))
        );
        assert_eq!(controller.text(), "3");
    }

    #[test]
    fn test_step_during_edit_survives_revert() {
        let (mut controller, events) = recording_controller(ControllerConfig::default());
        type_and_blur(&mut controller, "40");
        events.borrow_mut().clear();

        controller.focus();
        controller.input("junk");
        assert_eq!(
            controller.decrement(),
            Some(ChangeEvent::new(39.0, Unit::Percent))
        );
        assert_eq!(controller.text(), "39");

        // The click replaced the typed text, so blur commits it again
        assert_eq!(
            controller.blur(),
            Some(ChangeEvent::new(39.0, Unit::Percent))
        );
        assert_eq!(controller.value(), 39.0);

        // And it is now the revert target
        assert_eq!(
            type_and_blur(&mut controller, "nope"),
            Some(ChangeEvent::new(39.0, Unit::Percent))
        );
        assert_eq!(
            *events.borrow(),
            vec![ChangeEvent::new(39.0, Unit::Percent); 3]
        );
    }

    #[test]
    fn test_step_during_edit_then_retype_and_revert() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "40");

        controller.focus();
        controller.input("junk");
        controller.increment();
        controller.input("still junk");

        assert_eq!(
            controller.blur(),
            Some(ChangeEvent::new(41.0, Unit::Percent))
        );
    }

    #[test]
    fn test_overflowing_step_is_ignored() {
        let config = ControllerConfig::default()
            .with_initial_unit(Unit::Pixel)
            .with_step(1e308);
        let mut controller = UnitValueController::new(config).unwrap();

        assert_eq!(
            controller.increment(),
            Some(ChangeEvent::new(1e308, Unit::Pixel))
        );
        assert_eq!(controller.increment(), None);
        assert!(controller.value().is_finite());
        assert_eq!(controller.value(), 1e308);
    }

    #[test]
    fn test_negative_zero_entry_emits_plain_zero() {
        let mut controller = UnitValueController::default();
        type_and_blur(&mut controller, "10");

        let event = type_and_blur(&mut controller, "-0").unwrap();
        assert!(event.value.is_sign_positive());
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"value":0.0,"unit":"%"}"#
        );
    }

    #[test]
    fn test_blur_without_focus_is_silent() {
        let (mut controller, events) = recording_controller(ControllerConfig::default());

        assert_eq!(controller.blur(), None);
        assert_eq!(controller.blur_with_result(), None);
        assert!(events.borrow().is_empty());

        controller.focus();
        assert_eq!(
            controller.blur(),
            Some(ChangeEvent::new(0.0, Unit::Percent))
        );
        assert_eq!(controller.blur(), None);
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_unit_switch_while_editing_cannot_revert_out_of_range() {
        let mut controller = UnitValueController::default();
        controller.set_unit(Unit::Pixel);
        type_and_blur(&mut controller, "500");

        controller.focus();
        controller.input("garbage");
        controller.set_unit(Unit::Percent);

        assert_eq!(
            controller.blur(),
            Some(ChangeEvent::new(100.0, Unit::Percent))
        );
    }

    #[test]
    fn test_set_value_clamps_and_rejects_non_finite() {
        let mut controller = UnitValueController::default();

        assert_eq!(
            controller.set_value(250.0),
            Ok(Some(ChangeEvent::new(100.0, Unit::Percent)))
        );
        assert_eq!(
            controller.set_value(f64::NAN).map_err(|e| e.to_string()),
            Err("Value must be finite, got NaN".to_string())
        );
        assert!(matches!(
            controller.set_value(f64::INFINITY),
            Err(ControllerError::NonFiniteValue(_))
        ));
        assert_eq!(controller.value(), 100.0);
    }

    #[test]
    fn test_control_hints() {
        let mut controller = UnitValueController::default();

        let decrement = controller.decrement_control();
        assert!(decrement.disabled);
        assert_eq!(decrement.hint.as_deref(), Some("Value must be greater than 0"));
        assert!(!controller.increment_control().disabled);

        type_and_blur(&mut controller, "100");
        let increment = controller.increment_control();
        assert!(increment.disabled);
        assert_eq!(increment.hint.as_deref(), Some("Value must be smaller than 100"));
        assert_eq!(controller.decrement_control().hint, None);
    }

    #[test]
    fn test_view_serializes_for_host() {
        let mut controller = UnitValueController::default();
        controller.focus();
        controller.input("4,");

        let json = serde_json::to_value(controller.view()).unwrap();
        assert_eq!(json["value"], 0.0);
        assert_eq!(json["unit"], "%");
        assert_eq!(json["text"], "4,");
        assert_eq!(json["editing"], true);
        assert_eq!(json["decrement"]["disabled"], true);
        assert!(json["increment"].get("hint").is_none());
    }

    #[test]
    fn test_change_event_wire_format() {
        let json = serde_json::to_string(&ChangeEvent::new(12.3, Unit::Percent)).unwrap();
        assert_eq!(json, r#"{"value":12.3,"unit":"%"}"#);
        assert_eq!(ChangeEvent::new(1001.0, Unit::Pixel).to_string(), "1001px");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ControllerConfig::default().with_initial_value(-3.0);
        assert!(UnitValueController::new(config).is_err());
    }

    #[derive(Debug, Clone)]
    enum Action {
        Type(String),
        Increment,
        Decrement,
        Unit(Unit),
        Set(f64),
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            "-?[0-9]{0,4}([.,][0-9]{0,3})?[a-z]?".prop_map(Action::Type),
            Just(Action::Increment),
            Just(Action::Decrement),
            prop_oneof![Just(Unit::Percent), Just(Unit::Pixel)].prop_map(Action::Unit),
            (-500.0f64..5000.0).prop_map(Action::Set),
        ]
    }

    proptest! {
        #[test]
        fn prop_value_stays_within_unit_bounds(
            step in 0.5f64..250.0,
            actions in proptest::collection::vec(action(), 1..40),
        ) {
            let config = ControllerConfig::default().with_step(step);
            let mut controller = UnitValueController::new(config).unwrap();

            for action in actions {
                let event = match action {
                    Action::Type(text) => type_and_blur(&mut controller, &text),
                    Action::Increment => controller.increment(),
                    Action::Decrement => controller.decrement(),
                    Action::Unit(unit) => controller.set_unit(unit),
                    Action::Set(value) => controller.set_value(value).unwrap(),
                };

                let bounds = controller.bounds();
                prop_assert!(bounds.contains(controller.value()));
                if let Some(event) = event {
                    prop_assert_eq!(event.value, controller.value());
                    prop_assert_eq!(event.unit, controller.unit());
                }
                prop_assert!(!controller.is_editing());
            }
        }

        #[test]
        fn prop_failed_parse_reverts_to_previous(
            start in 0u32..=100,
            junk in "[a-z ]{1,6}",
        ) {
            let mut controller = UnitValueController::default();
            let start = f64::from(start);
            controller.set_value(start).unwrap();

            let event = type_and_blur(&mut controller, &junk);

            prop_assert_eq!(event, Some(ChangeEvent::new(start, Unit::Percent)));
            prop_assert_eq!(controller.text(), crate::units::format_value(start));
        }
    }
}
