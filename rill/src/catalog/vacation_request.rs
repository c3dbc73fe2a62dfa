use rill_builder::{
    FormField, ProcessDefinition, Result, ServiceOptions, UserOptions, process,
};

pub fn definition() -> Result<ProcessDefinition> {
    process("vacation-request", |p| {
        let start = p.start("requestSubmitted")?;
        let approve = p.user(
            "managerApproval",
            UserOptions::new()
                .candidate_group("management")
                .form_key("vacation-approval-form")
                .form("approved", FormField::new("boolean").required(true))
                .form("reason", FormField::new("string")),
        )?;
        let decision = p.gateway("approvalDecision")?;
        let notify = p.service(
            "notifyEmployee",
            ServiceOptions::new()
                .delegate("${notificationService}")
                .field("template", "vacation-approved"),
        )?;
        let reject = p.service(
            "notifyRejection",
            ServiceOptions::new()
                .delegate("${notificationService}")
                .field("template", "vacation-rejected"),
        )?;
        let update_calendar = p.service(
            "updateCalendar",
            ServiceOptions::new().class("com.example.CalendarService"),
        )?;
        let end = p.end("done")?;

        p.pipe(&[&start, &approve, &decision]);
        p.flow_with(&decision, &notify, "${approved}");
        p.flow_with(&decision, &reject, "${!approved}");
        p.pipe(&[&notify, &update_calendar, &end]);
        p.flow(&reject, &end);
        Ok(())
    })
}
