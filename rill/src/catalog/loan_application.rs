use rill_builder::{
    CallOptions, FlowOptions, FormField, GatewayOptions, ProcessDefinition, Result,
    ScriptOptions, ServiceOptions, TimerBoundaryOptions, UserOptions, Var, VarType, expr,
    process,
};

const AUTO_APPROVE_SCRIPT: &str = r#"def maxAuto = creditScore > 750 ? 50000 : 25000
execution.setVariable("approved", amount <= maxAuto)
execution.setVariable("interestRate", creditScore > 750 ? 3.5 : 5.2)"#;

pub fn definition() -> Result<ProcessDefinition> {
    process("loan-application", |p| {
        p.var("applicantId", VarType::Text);
        let amount = p.var("amount", VarType::Number);
        let approved = Var::new("approved", VarType::Boolean);

        let start = p.start("applicationReceived")?;
        let credit_check = p.call(
            "creditCheck",
            CallOptions::new("credit-score-check")
                .input("applicantId", "applicantId")
                .input("ssn", expr("application.ssn"))
                .output("creditScore", "creditScore")
                .output("riskCategory", "riskCategory"),
        )?;
        let risk =
            p.gateway_with("assessRisk", GatewayOptions::new().default_flow("standardPath"))?;
        let auto_approve = p.script(
            "autoApprove",
            ScriptOptions::new(AUTO_APPROVE_SCRIPT)
                .input(&amount)
                .output(approved.name(), approved.ty())
                .output("interestRate", VarType::Number),
        )?;
        let underwrite = p.user(
            "manualUnderwriting",
            UserOptions::new()
                .name("Manual Underwriting")
                .candidate_group("underwriters")
                .form_key("underwriting-form")
                .output(approved.name(), approved.ty())
                .output("interestRate", VarType::Number)
                .output("conditions", VarType::Text)
                .form("approved", FormField::new("boolean").required(true))
                .form("interestRate", FormField::new("double").required(true))
                .form("conditions", FormField::new("string")),
        )?;
        let escalation = p.timer(
            "escalationTimer",
            TimerBoundaryOptions::new(&underwrite)
                .interrupting(false)
                .duration("P3D"),
        )?;
        let escalate = p.service(
            "escalateReview",
            ServiceOptions::new()
                .delegate("${notificationService}")
                .field("template", "underwriting-escalation"),
        )?;
        let reject = p.service(
            "rejectApplication",
            ServiceOptions::new()
                .delegate("${notificationService}")
                .field("template", "loan-rejected")
                .field("reason", expr("'Risk category: ' + riskCategory")),
        )?;
        let decision =
            p.gateway_with("checkDecision", GatewayOptions::new().default_flow("rejectedPath"))?;
        let offer = p.service(
            "generateOffer",
            ServiceOptions::new().class("com.example.loan.OfferGenerator"),
        )?;
        let send_docs = p.call(
            "sendDocuments",
            CallOptions::new("document-generation")
                .input("applicantId", "applicantId")
                .input("loanAmount", "amount")
                .input("rate", "interestRate")
                .input(
                    "templateName",
                    expr("approved ? 'offer-letter' : 'rejection-letter'"),
                )
                .output("documentRef", "documentRef"),
        )?;
        let end = p.end("done")?;
        let rejected_end = p.end("rejected")?;

        p.pipe(&[&start, &credit_check, &risk]);
        p.flow_with(&risk, &auto_approve, "${riskCategory == 'LOW' && amount <= 50000}");
        p.flow_with(&risk, &reject, "${riskCategory == 'HIGH' || creditScore < 500}");
        p.flow_with(&risk, &underwrite, FlowOptions::new().id("standardPath"));
        p.pipe(&[&escalation, &escalate]);
        p.flow(&auto_approve, &decision);
        p.flow(&underwrite, &decision);
        p.flow_with(&decision, &offer, &approved);
        p.flow_with(&decision, &reject, FlowOptions::new().id("rejectedPath"));
        p.pipe(&[&offer, &send_docs, &end]);
        p.flow(&reject, &rejected_end);
        Ok(())
    })
}
