//! Golden-file tests: whole documents compared byte for byte against
//! `tests/fixtures`.

use rill_builder::{
    ErrorBoundaryOptions, FlowOptions, FormField, GatewayOptions, ParallelOptions,
    ProcessDefinition, ServiceOptions, TimerBoundaryOptions, TimerCatchOptions, UserOptions,
    VarType, expr, process,
};
use rill_codegen::to_bpmn;

fn order_approval() -> ProcessDefinition {
    process("order-approval", |p| {
        let order_id = p.var("orderId", VarType::Text);
        let amount = p.var("amount", VarType::Number);

        let start = p.start("orderReceived")?;
        let validate = p.service(
            "validateOrder",
            ServiceOptions::new()
                .delegate("${orderValidator}")
                .inputs([&order_id, &amount])
                .output("isValid", VarType::Boolean)
                .output("reason", VarType::Text)
                .field("minAmount", "50")
                .field("maxAmount", expr("config.maxOrderAmount")),
        )?;
        let is_valid = validate.output("isValid").cloned().expect("declared output");

        let check_amount =
            p.gateway_with("checkAmount", GatewayOptions::new().default_flow("manualPath"))?;
        let auto_approve = p.service(
            "autoApprove",
            ServiceOptions::new().class("com.example.AutoApproveService"),
        )?;
        let review = p.user(
            "manualReview",
            UserOptions::new()
                .candidate_group("managers")
                .form_key("approval-form")
                .input(&amount)
                .output("approved", VarType::Boolean)
                .output("comments", VarType::Text)
                .form("approved", FormField::new("boolean").required(true))
                .form("comments", FormField::new("string")),
        )?;
        let reminder = p.timer(
            "reminderTimer",
            TimerBoundaryOptions::new(&review)
                .interrupting(false)
                .cycle("R2/PT6H"),
        )?;
        let send_reminder = p.service(
            "sendReminder",
            ServiceOptions::new().delegate("${emailService}"),
        )?;
        let end = p.end("done")?;

        p.pipe(&[&start, &validate, &check_amount]);
        p.flow_with(&check_amount, &auto_approve, is_valid);
        p.flow_with(&check_amount, &review, FlowOptions::new().id("manualPath"));
        p.flow(&auto_approve, &end);
        p.flow(&review, &end);
        p.flow(&reminder, &send_reminder);
        p.flow(&send_reminder, &end);
        Ok(())
    })
    .expect("order-approval builds")
}

fn subprocess_example() -> ProcessDefinition {
    process("subprocess-example", |p| {
        let start = p.start("start")?;
        let sub = p.subprocess("approvalSub", |sub| {
            let sub_start = sub.start("subStart")?;
            let review = sub.user("review", UserOptions::new().assignee("${initiator}"))?;
            let sub_end = sub.end("subEnd")?;
            sub.flow(&sub_start, &review);
            sub.flow(&review, &sub_end);
            Ok(())
        })?;
        let on_error =
            p.error_boundary("onSubError", ErrorBoundaryOptions::new(&sub, "ERR_REJECTED"))?;
        let handle = p.service(
            "handleRejection",
            ServiceOptions::new().delegate("${rejectionHandler}"),
        )?;
        let end = p.end("end")?;

        p.error("ERR_REJECTED", "REJECTED");

        p.flow(&start, &sub);
        p.flow(&sub, &end);
        p.flow(&on_error, &handle);
        p.flow(&handle, &end);
        Ok(())
    })
    .expect("subprocess-example builds")
}

#[test]
fn test_order_approval_matches_fixture() {
    let expected = include_str!("fixtures/order-approval.bpmn20.xml");
    assert_eq!(to_bpmn(&order_approval()), expected);
}

#[test]
fn test_subprocess_example_matches_fixture() {
    let expected = include_str!("fixtures/subprocess-example.bpmn20.xml");
    assert_eq!(to_bpmn(&subprocess_example()), expected);
}

#[test]
fn test_every_name_is_humanized_id() {
    let xml = to_bpmn(&order_approval());
    for (id, name) in [
        ("orderReceived", "Order Received"),
        ("validateOrder", "Validate Order"),
        ("checkAmount", "Check Amount"),
        ("sendReminder", "Send Reminder"),
    ] {
        assert!(
            xml.contains(&format!("id=\"{id}\" name=\"{name}\"")),
            "missing {id}"
        );
    }
}

#[test]
fn test_gateway_default_and_conditional_flow() {
    let def = process("gateway-default", |p| {
        let s = p.start("s")?;
        let gw = p.gateway_with("gw", GatewayOptions::new().default_flow("d1"))?;
        let task_a = p.service("taskA", ServiceOptions::new().delegate("${a}"))?;
        let task_b = p.service("taskB", ServiceOptions::new().delegate("${b}"))?;
        let e = p.end("e")?;
        p.flow(&s, &gw);
        p.flow_with(&gw, &task_a, FlowOptions::new().id("d1"));
        p.flow_with(&gw, &task_b, "${x>1}");
        p.pipe(&[&task_a, &e]);
        p.pipe(&[&task_b, &e]);
        Ok(())
    })
    .unwrap();

    let xml = to_bpmn(&def);
    assert!(xml.contains("<exclusiveGateway id=\"gw\" name=\"Gw\" default=\"d1\"/>"));
    assert!(xml.contains("<sequenceFlow id=\"d1\" sourceRef=\"gw\" targetRef=\"taskA\"/>\n"));
    assert!(xml.contains(
        "<sequenceFlow id=\"flow_gw_to_taskB_2\" name=\"${x&gt;1}\" sourceRef=\"gw\" targetRef=\"taskB\">\n      \
         <conditionExpression xsi:type=\"tFormalExpression\"><![CDATA[${x>1}]]></conditionExpression>\n    \
         </sequenceFlow>\n"
    ));
}

#[test]
fn test_parallel_branches_with_timer_catch() {
    let def = process("parallel-wait", |p| {
        let s = p.start("s")?;
        let fork = p.parallel("forkAll")?;
        let wait = p.timer_catch(
            "waitHalfHour",
            TimerCatchOptions::new().date("2030-01-01T00:00:00Z").duration("PT30M"),
        )?;
        let notify = p.service("notify", ServiceOptions::new().delegate("${notifier}"))?;
        let join = p.parallel_with("joinAll", ParallelOptions::new().name("Join"))?;
        let e = p.end("e")?;
        p.pipe(&[&s, &fork, &wait, &join, &e]);
        p.pipe(&[&fork, &notify, &join]);
        Ok(())
    })
    .unwrap();

    let xml = to_bpmn(&def);
    assert!(xml.contains("    <parallelGateway id=\"forkAll\" name=\"Fork All\"/>\n"));
    assert!(xml.contains("    <parallelGateway id=\"joinAll\" name=\"Join\"/>\n"));
    assert!(
        xml.contains(
            "    <intermediateCatchEvent id=\"waitHalfHour\" name=\"Wait Half Hour\">\n      \
             <timerEventDefinition>\n        \
             <timeDuration>PT30M</timeDuration>\n      \
             </timerEventDefinition>\n    \
             </intermediateCatchEvent>\n"
        ),
        "{xml}"
    );
    assert!(!xml.contains("timeDate"));
    assert!(xml.contains(
        "<sequenceFlow id=\"flow_forkAll_to_waitHalfHour_2\" sourceRef=\"forkAll\" targetRef=\"waitHalfHour\"/>"
    ));
}

#[test]
fn test_explicit_empty_strings_are_written() {
    let def = process("empty-strings", |p| {
        let s = p.start("s")?;
        let gw = p.gateway_with("gw", GatewayOptions::new().default_flow(""))?;
        let e = p.end("e")?;
        p.flow(&s, &gw);
        p.flow_with(&gw, &e, "");
        Ok(())
    })
    .unwrap();

    let xml = to_bpmn(&def);
    assert!(xml.contains("<exclusiveGateway id=\"gw\" name=\"Gw\" default=\"\"/>"));
    assert!(xml.contains(
        "<sequenceFlow id=\"flow_gw_to_e_2\" name=\"\" sourceRef=\"gw\" targetRef=\"e\"/>\n"
    ));
    assert!(!xml.contains("conditionExpression"));
}
