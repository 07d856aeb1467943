//! 题目渲染服务 - 业务能力层
//!
//! 按题型分派到填空题或选择题渲染，产出三类片段：
//! 展示（presentation）、评分规则（resprocessing）、反馈（itemfeedback）。

use crate::config::Config;
use crate::error::{AppResult, RenderError};
use crate::models::question::{QuestionRecord, QuestionType};
use crate::services::choice_renderer::ChoiceRenderer;
use crate::services::gap_renderer::GapRenderer;
use crate::xml::Element;
use std::fmt;

/// 评分条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// 作答等于给定值（填空答案或被选中的选项）
    Equals,
    /// 作答不等于给定值（选项未被选中）
    NotEquals,
}

/// 一条评分规则：满足条件时加 `points` 分
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringRule {
    pub respident: String,
    pub value: String,
    pub condition: Condition,
    pub points: f64,
    pub feedback_ref: String,
}

impl ScoringRule {
    pub fn to_element(&self) -> Element {
        let varequal = Element::new("varequal")
            .attr("respident", self.respident.as_str())
            .text(self.value.as_str());
        let conditionvar = match self.condition {
            Condition::Equals => Element::new("conditionvar").child(varequal),
            Condition::NotEquals => {
                Element::new("conditionvar").child(Element::new("not").child(varequal))
            }
        };

        Element::new("respcondition")
            .attr("continue", "Yes")
            .child(conditionvar)
            .child(
                Element::new("setvar")
                    .attr("action", "Add")
                    .text(format_points(self.points)),
            )
            .child(
                Element::new("displayfeedback")
                    .attr("feedbacktype", "Response")
                    .attr("linkrefid", self.feedback_ref.as_str()),
            )
    }
}

/// 分值按 `%f` 的格式写出（六位小数）
pub fn format_points(points: f64) -> String {
    format!("{:.6}", points)
}

/// 子项种类，用于统计输出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubItemKind {
    Gaps,
    AnswerChoices,
}

/// 单道题的渲染诊断信息
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub kind: SubItemKind,
    pub sub_items: usize,
    /// 所有"正确状态"结果上分配的分数之和
    pub points_assigned: f64,
}

impl RenderReport {
    /// 总分不等于 1 时需要警告
    pub fn has_point_mismatch(&self) -> bool {
        self.points_assigned != 1.0
    }
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            SubItemKind::Gaps => "个空",
            SubItemKind::AnswerChoices => "个选项",
        };
        write!(
            f,
            "共 {} {}，总分 {:.2}",
            self.sub_items, kind, self.points_assigned
        )
    }
}

/// 一道题的渲染结果
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuestion {
    pub question_type: QuestionType,
    pub presentation: Vec<Element>,
    pub rules: Vec<ScoringRule>,
    pub feedback: Vec<Element>,
    pub report: RenderReport,
}

impl RenderedQuestion {
    pub fn resprocessing(&self) -> Vec<Element> {
        self.rules.iter().map(ScoringRule::to_element).collect()
    }

    /// 某个作答标识在指定条件下的规则
    pub fn rules_for(&self, respident: &str, value: &str, condition: Condition) -> Vec<&ScoringRule> {
        self.rules
            .iter()
            .filter(|rule| {
                rule.respident == respident && rule.value == value && rule.condition == condition
            })
            .collect()
    }
}

/// 文本材料片段
pub(crate) fn material(text: impl Into<String>, texttype: &str) -> Element {
    Element::new("material").child(
        Element::new("mattext")
            .attr("texttype", texttype)
            .text(text),
    )
}

/// 空的反馈片段
pub(crate) fn feedback_stub(ident: impl Into<String>) -> Element {
    Element::new("itemfeedback")
        .attr("ident", ident)
        .attr("view", "All")
        .child(
            Element::new("flow_mat")
                .child(Element::new("material").child(Element::new("mattext"))),
        )
}

/// 题目渲染服务
///
/// 职责：
/// - 按题型分派
/// - 只处理单道题目，不关心文件和流程
pub struct QuestionRenderer {
    gap: GapRenderer,
    choice: ChoiceRenderer,
}

impl QuestionRenderer {
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            gap: GapRenderer::new()?,
            choice: ChoiceRenderer::new(config.shuffle_answers),
        })
    }

    /// 渲染一道题
    ///
    /// 题型未知、没有空或没有选项时返回 [`RenderError`]，调用方应跳过该题。
    pub fn render(&self, record: &QuestionRecord) -> Result<RenderedQuestion, RenderError> {
        match record.question_type {
            Some(QuestionType::Gap) => self.gap.render(record),
            Some(question_type @ (QuestionType::ChoiceSingle | QuestionType::ChoiceMulti)) => {
                self.choice.render(record, question_type)
            }
            None => Err(RenderError::UnknownType {
                id: record.id.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> QuestionRenderer {
        QuestionRenderer::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let record = QuestionRecord::new("il_0_qst_5", None, "Strange").with_body("body");
        assert_eq!(
            renderer().render(&record),
            Err(RenderError::UnknownType { id: "il_0_qst_5".to_string() })
        );
    }

    #[test]
    fn test_dispatch_by_type() {
        let gap = QuestionRecord::new("a", Some(QuestionType::Gap), "").with_body("[gap]x[/gap]");
        let choice = QuestionRecord::new("b", Some(QuestionType::ChoiceMulti), "").with_body("S<br/>_ x");
        assert_eq!(renderer().render(&gap).unwrap().report.kind, SubItemKind::Gaps);
        assert_eq!(renderer().render(&choice).unwrap().report.kind, SubItemKind::AnswerChoices);
    }

    #[test]
    fn test_negated_rule_markup() {
        let rule = ScoringRule {
            respident: "MCMR".to_string(),
            value: "2".to_string(),
            condition: Condition::NotEquals,
            points: 0.5,
            feedback_ref: "Response_2".to_string(),
        };
        let xml = rule.to_element().to_xml_string().unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<respcondition continue="Yes"><conditionvar><not><varequal respident="MCMR">2</varequal></not></conditionvar>"#,
                r#"<setvar action="Add">0.500000</setvar><displayfeedback feedbacktype="Response" linkrefid="Response_2"/></respcondition>"#
            )
        );
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(1.0), "1.000000");
        assert_eq!(format_points(0.0), "0.000000");
        assert_eq!(format_points(0.33), "0.330000");
    }
}
