use vardef_core::{
    DeleteFailure, DeleteState, EditorError, EditorSession, FieldRule, FormField, GatewayError,
    Keystroke, MemoryGateway, SaveDisposition, StatusLevel, SyncGateway, VarAttributes, VarDefMap,
};

fn kitchen() -> VarDefMap {
    let mut defs = VarDefMap::new();
    defs.insert(
        "temp.kitchen".to_string(),
        VarAttributes {
            var_type: "float".to_string(),
            unit: "C".to_string(),
            threshold: 5,
            ttl: 3600,
        },
    );
    defs
}

fn loaded_session(gateway: &MemoryGateway) -> EditorSession {
    let mut session = EditorSession::new();
    session.load(gateway).expect("initial load should succeed");
    session
}

#[test]
fn load_then_select_mirrors_stored_values() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);

    let names: Vec<_> = session.nodes().map(|node| node.name).collect();
    assert_eq!(names, vec!["temp.kitchen"]);
    assert!(session.form().is_none());

    let form = session.select("temp.kitchen").unwrap();
    assert_eq!(form.var_type, "float");
    assert_eq!(form.unit, "C");
    assert_eq!(form.threshold, "5");
    assert_eq!(form.ttl, "3600");
    assert_eq!(session.selected_name(), Some("temp.kitchen"));
    assert!(!session.is_dirty());
}

#[test]
fn typed_name_creates_default_node_and_marks_dirty() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);

    for ch in "new var!".chars() {
        session.press_name_key(Keystroke::Char(ch));
    }
    assert_eq!(session.name_input().value(), "newvar");
    session.press_name_key(Keystroke::ArrowLeft);
    session.press_name_key(Keystroke::ArrowLeft);
    session.press_name_key(Keystroke::ArrowLeft);
    session.press_name_key(Keystroke::Char('.'));
    assert_eq!(session.name_input().value(), "new.var");
    assert!(session.create_enabled());

    session.create_from_input().unwrap();

    let node = session.store().get("new.var").expect("created node");
    assert_eq!(*node.attributes, VarAttributes::default());
    assert_eq!(node.attributes.ttl, 7200);
    assert!(session.is_dirty());
    assert_eq!(gateway.call_counts().save, 0);
}

#[test]
fn duplicate_create_is_rejected_and_keeps_indicator_clean() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);

    let err = session.create("temp.kitchen").unwrap_err();

    assert!(matches!(err, EditorError::Store(_)));
    assert!(!session.is_dirty());
    assert_eq!(session.store().get("temp.kitchen").unwrap().attributes.threshold, 5);
}

#[test]
fn confirmed_delete_removes_node_and_second_confirm_fails() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();

    session.request_delete().unwrap();
    assert_eq!(
        session.delete_state(),
        DeleteState::ConfirmPending {
            target: "temp.kitchen".to_string()
        }
    );

    let removed = session.confirm_delete().unwrap();
    assert_eq!(removed.name, "temp.kitchen");
    assert!(session.store().is_empty());
    assert!(session.is_dirty());
    assert_eq!(session.delete_state(), DeleteState::Idle);
    assert!(session.form().is_none());

    let err = session.confirm_delete().unwrap_err();
    assert_eq!(err, DeleteFailure::NotPending);
    assert_eq!(session.take_alert().as_deref(), Some("Command failed"));

    let err = session.request_delete().unwrap_err();
    assert_eq!(err, DeleteFailure::NoSelection);
}

#[test]
fn cancelled_delete_leaves_store_untouched() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();

    session.request_delete().unwrap();
    assert!(session.cancel_delete());

    assert_eq!(session.store().len(), 1);
    assert!(!session.is_dirty());
    assert_eq!(session.delete_state(), DeleteState::Idle);
    assert!(!session.cancel_delete());
}

#[test]
fn invalid_threshold_blocks_submit_without_network_call() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();
    session.set_field(FormField::Threshold, "-3");

    let err = session.submit(&gateway).unwrap_err();

    let errors = match err {
        EditorError::Validation(errors) => errors,
        other => panic!("expected validation error, got {other:?}"),
    };
    assert_eq!(errors.get(FormField::Threshold), Some(FieldRule::Positive));
    assert_eq!(
        session.field_errors().message(FormField::Threshold),
        Some("Value must be a positive integer.")
    );
    assert_eq!(gateway.call_counts().save, 0);
}

#[test]
fn empty_required_fields_issue_zero_gateway_calls() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();

    for field in FormField::ALL {
        let original = session.form().unwrap().get(field).to_string();
        session.set_field(field, "");
        assert!(matches!(
            session.submit(&gateway),
            Err(EditorError::Validation(_))
        ));
        session.set_field(field, original);
    }
    assert_eq!(gateway.call_counts().save, 0);
}

#[test]
fn submit_without_selection_is_rejected() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);

    assert!(matches!(
        session.submit(&gateway),
        Err(EditorError::NoSelection)
    ));
    assert_eq!(gateway.call_counts().save, 0);
}

#[test]
fn successful_save_reports_info_and_reconciles_store() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();
    session.set_field(FormField::Unit, "degC");

    let disposition = session.submit(&gateway).unwrap();

    assert_eq!(disposition, SaveDisposition::Saved);
    let status = session.status().expect("status set");
    assert_eq!(status.level, StatusLevel::Info);
    assert_eq!(status.text, "Save successful");
    assert_eq!(session.store().get("temp.kitchen").unwrap().attributes.unit, "degC");
    assert!(!session.is_dirty());

    let saved = gateway.saved_requests();
    assert_eq!(saved.len(), 1);
    assert_eq!(
        saved[0].form_pairs(),
        vec![
            ("var_name", "temp.kitchen".to_string()),
            ("var_type", "float".to_string()),
            ("var_unit", "degC".to_string()),
            ("var_threshold", "5".to_string()),
            ("var_ttl", "3600".to_string()),
        ]
    );
}

#[test]
fn failed_save_shows_first_detail_line() {
    let gateway = MemoryGateway::new(kitchen());
    gateway.fail_next_save(GatewayError::Rejected {
        status: 400,
        detail: Some("bad unit\nmore detail".to_string()),
    });
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();
    session.set_field(FormField::Unit, "??");

    let disposition = session.submit(&gateway).unwrap();

    assert!(matches!(disposition, SaveDisposition::Failed(_)));
    let status = session.status().expect("status set");
    assert!(status.is_error());
    assert_eq!(status.text, "Save failure (bad unit)");
    assert_eq!(session.store().get("temp.kitchen").unwrap().attributes.unit, "C");
}

#[test]
fn stale_save_reply_is_dropped_after_newer_dispatch() {
    let mut defs = kitchen();
    defs.insert("hum".to_string(), VarAttributes::default());
    let gateway = MemoryGateway::new(defs);
    let mut session = loaded_session(&gateway);

    session.select("temp.kitchen").unwrap();
    session.set_field(FormField::Unit, "K");
    let first = session.begin_save().unwrap();

    session.select("hum").unwrap();
    session.set_field(FormField::VarType, "humidity");
    session.set_field(FormField::Unit, "%");
    let second = session.begin_save().unwrap();
    assert_ne!(first.ticket, second.ticket);

    let first_result = gateway.save_one(&first.request);
    let second_result = gateway.save_one(&second.request);
    assert_eq!(session.finish_save(second, second_result), SaveDisposition::Saved);
    assert_eq!(
        session.finish_save(first, first_result),
        SaveDisposition::Superseded
    );

    assert_eq!(session.status().unwrap().text, "Save successful");
    assert_eq!(session.store().get("hum").unwrap().attributes.unit, "%");
    assert_eq!(session.store().get("temp.kitchen").unwrap().attributes.unit, "C");
}

#[test]
fn apply_all_pushes_set_and_clears_dirty() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.create("new.var").unwrap();
    assert!(session.is_dirty());

    gateway.fail_next_apply(GatewayError::Transport("connection refused".to_string()));
    let failure = session.apply_all(&gateway).unwrap_err();
    assert_eq!(failure.status_text(), "Apply failure (connection refused)");
    assert!(session.is_dirty());

    session.apply_all(&gateway).unwrap();
    assert!(!session.is_dirty());
    assert_eq!(session.status().unwrap().text, "Configuration applied");
    assert!(gateway.definitions().contains_key("new.var"));
    assert_eq!(gateway.call_counts().apply, 2);
}

#[test]
fn failed_load_becomes_fatal_error() {
    let gateway = MemoryGateway::new(kitchen());
    gateway.fail_next_load(GatewayError::Rejected {
        status: 500,
        detail: Some("config file missing\n/etc/cstbox/wsfeed.cfg".to_string()),
    });
    let mut session = EditorSession::new();

    let fatal = session.load(&gateway).unwrap_err();

    assert_eq!(fatal.detail_lines().len(), 2);
    assert_eq!(session.fatal_error(), Some(&fatal));
    assert!(session.store().is_empty());
}

#[test]
fn reload_clears_dirty_and_selection() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();
    session.create("other").unwrap();

    session.load(&gateway).unwrap();

    assert!(!session.is_dirty());
    assert_eq!(session.selected_name(), None);
    assert!(session.store().get("other").is_none());
    assert_eq!(gateway.call_counts().load, 2);
}

#[test]
fn reload_drops_pending_delete_confirmation() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();
    session.request_delete().unwrap();

    session.load(&gateway).unwrap();
    assert_eq!(session.delete_state(), DeleteState::Idle);

    let err = session.confirm_delete().unwrap_err();
    assert_eq!(err, DeleteFailure::NotPending);
    assert_eq!(session.store().len(), 1);
    assert!(!session.is_dirty());
}

#[test]
fn save_reply_dispatched_before_reload_is_superseded() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);
    session.select("temp.kitchen").unwrap();
    session.set_field(FormField::Unit, "K");
    let pending = session.begin_save().unwrap();

    session.load(&gateway).unwrap();

    assert_eq!(session.finish_save(pending, Ok(())), SaveDisposition::Superseded);
    assert_eq!(session.store().get("temp.kitchen").unwrap().attributes.unit, "C");
    assert!(!session.is_dirty());
}

#[test]
fn delete_request_without_selection_raises_alert() {
    let gateway = MemoryGateway::new(kitchen());
    let mut session = loaded_session(&gateway);

    let err = session.request_delete().unwrap_err();

    assert_eq!(err, DeleteFailure::NoSelection);
    assert_eq!(session.delete_state(), DeleteState::Idle);
    assert_eq!(session.take_alert().as_deref(), Some("Command failed"));
    assert_eq!(session.store().len(), 1);
}
