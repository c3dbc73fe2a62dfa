use rill_builder::{
    ErrorBoundaryOptions, ProcessDefinition, Result, ServiceOptions, UserOptions, process,
};

pub fn definition() -> Result<ProcessDefinition> {
    process("subprocess-example", |p| {
        let start = p.start("start")?;
        let sub = p.subprocess("approvalSub", |sub| {
            let sub_start = sub.start("subStart")?;
            let review = sub.user("review", UserOptions::new().assignee("${initiator}"))?;
            let sub_end = sub.end("subEnd")?;
            sub.pipe(&[&sub_start, &review, &sub_end]);
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

        p.pipe(&[&start, &sub, &end]);
        p.pipe(&[&on_error, &handle, &end]);
        Ok(())
    })
}
