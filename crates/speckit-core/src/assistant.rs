//! Command phrases for an external AI assistant and the workflow
//! report that strings them together. Purely textual — nothing here is
//! ever executed.

use crate::templates::FEATURE_PLACEHOLDER;

/// Map a workflow keyword to its `/speckit.<keyword>` phrase.
///
/// `constitution` never takes a feature argument. For the others an
/// empty `feature` is rendered as the literal feature-name placeholder.
/// An unrecognized keyword yields an "unknown command" string rather
/// than an error.
pub fn command_phrase(command: &str, feature: &str) -> String {
    match command {
        "constitution" => "/speckit.constitution".to_string(),
        "specify" | "plan" | "tasks" | "implement" | "clarify" | "analyze" | "checklist" => {
            if feature.is_empty() {
                format!("/speckit.{command} {FEATURE_PLACEHOLDER}")
            } else {
                format!("/speckit.{command} {feature}")
            }
        }
        other => format!("未知命令: {other}"),
    }
}

/// The fixed multi-section workflow report for `feature`.
pub fn workflow_report(feature: &str) -> String {
    let lines = [
        "🎯 Spec-Kit AI 工作流".to_string(),
        "=".repeat(50),
        String::new(),
        format!("功能名称: {feature}"),
        String::new(),
        "1️⃣  制定项目原则:".to_string(),
        format!("   {}", command_phrase("constitution", "")),
        String::new(),
        "2️⃣  描述功能需求:".to_string(),
        format!("   {}", command_phrase("specify", feature)),
        String::new(),
        "3️⃣  制定实施计划:".to_string(),
        format!("   {}", command_phrase("plan", feature)),
        String::new(),
        "4️⃣  分解任务列表:".to_string(),
        format!("   {}", command_phrase("tasks", feature)),
        String::new(),
        "5️⃣  执行代码实现:".to_string(),
        format!("   {}", command_phrase("implement", feature)),
        String::new(),
        "🔧 辅助命令:".to_string(),
        format!("   • 澄清需求: {}", command_phrase("clarify", feature)),
        format!("   • 分析一致性: {}", command_phrase("analyze", feature)),
        format!("   • 质量检查: {}", command_phrase("checklist", feature)),
        String::new(),
        "💡 使用建议:".to_string(),
        "   1. 首先运行 constitution 建立项目原则".to_string(),
        "   2. 按顺序执行 specify → plan → tasks → implement".to_string(),
        "   3. 遇到不确定时使用 clarify 澄清需求".to_string(),
        "   4. 完成后使用 analyze 和 checklist 进行质量检查".to_string(),
    ];
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phrase_with_feature() {
        assert_eq!(command_phrase("specify", "login"), "/speckit.specify login");
        assert_eq!(command_phrase("checklist", "login"), "/speckit.checklist login");
    }

    #[test]
    fn phrase_without_feature_uses_placeholder() {
        assert_eq!(command_phrase("specify", ""), "/speckit.specify [功能名称]");
    }

    #[test]
    fn constitution_ignores_feature() {
        assert_eq!(command_phrase("constitution", "login"), "/speckit.constitution");
        assert_eq!(command_phrase("constitution", ""), "/speckit.constitution");
    }

    #[test]
    fn unknown_keyword_is_reported_not_failed() {
        assert!(command_phrase("bogus", "x").starts_with("未知命令"));
        assert_eq!(command_phrase("bogus", "x"), "未知命令: bogus");
    }

    #[test]
    fn report_contains_all_phrases() {
        let report = workflow_report("login");
        assert!(report.contains("功能名称: login"));
        assert!(report.contains("/speckit.constitution"));
        for cmd in ["specify", "plan", "tasks", "implement", "clarify", "analyze", "checklist"] {
            assert!(report.contains(&format!("/speckit.{cmd} login")), "missing {cmd}");
        }
    }

    #[test]
    fn report_separator_is_fifty_chars() {
        let report = workflow_report("x");
        let sep = report.lines().nth(1).unwrap();
        assert_eq!(sep, "=".repeat(50));
    }
}
