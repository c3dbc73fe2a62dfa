use rill_builder::{
    FlowOptions, FormField, GatewayOptions, ProcessDefinition, Result, ServiceOptions,
    TimerBoundaryOptions, UserOptions, Var, VarType, expr, process,
};

pub fn definition() -> Result<ProcessDefinition> {
    process("order-approval", |p| {
        let order_id = p.var("orderId", VarType::Text);
        let amount = p.var("amount", VarType::Number);
        let is_valid = Var::new("isValid", VarType::Boolean);

        let start = p.start("orderReceived")?;
        let validate = p.service(
            "validateOrder",
            ServiceOptions::new()
                .delegate("${orderValidator}")
                .inputs([&order_id, &amount])
                .output(is_valid.name(), is_valid.ty())
                .output("reason", VarType::Text)
                .field("minAmount", "50")
                .field("maxAmount", expr("config.maxOrderAmount")),
        )?;
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
        p.flow_with(&check_amount, &auto_approve, &is_valid);
        p.flow_with(&check_amount, &review, FlowOptions::new().id("manualPath"));
        p.flow(&auto_approve, &end);
        p.flow(&review, &end);
        p.flow(&reminder, &send_reminder);
        p.flow(&send_reminder, &end);
        Ok(())
    })
}
