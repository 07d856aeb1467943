//! 填空题渲染

use crate::error::{AppResult, RenderError};
use crate::models::gap::{gap_pattern, GapSegment, GapText};
use crate::models::question::{QuestionRecord, QuestionType};
use crate::models::score::ScoreAllocation;
use crate::services::renderer::{
    feedback_stub, material, Condition, RenderReport, RenderedQuestion, ScoringRule, SubItemKind,
};
use crate::xml::Element;
use regex::Regex;

pub struct GapRenderer {
    pattern: Regex,
}

impl GapRenderer {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            pattern: gap_pattern()?,
        })
    }

    /// 渲染填空题
    ///
    /// 文本片段原样输出，第一个片段前加 `<p>`、最后一个片段后加 `</p>`；
    /// 每个空按精确匹配（区分大小写）给分，各空分值之和恰好为 1。
    pub fn render(&self, record: &QuestionRecord) -> Result<RenderedQuestion, RenderError> {
        let text = GapText::parse(&record.body, &self.pattern);
        let gap_count = text.gap_count();
        if gap_count == 0 {
            return Err(RenderError::NoGaps {
                id: record.id.clone(),
            });
        }

        let allocation = ScoreAllocation::uniform(gap_count);
        let segments = text.segments();
        let last_position = segments.len() - 1;

        let mut presentation = Vec::with_capacity(segments.len());
        let mut rules = Vec::with_capacity(gap_count);
        let mut feedback = Vec::with_capacity(gap_count);
        let mut points_assigned = 0.0;

        for (position, segment) in segments.iter().enumerate() {
            match segment {
                GapSegment::Text(plain) => {
                    let mut content = String::new();
                    if position == 0 {
                        content.push_str("<p>");
                    }
                    content.push_str(plain);
                    if position == last_position {
                        content.push_str("</p>");
                    }
                    presentation.push(material(content, "text/xhtml"));
                }
                GapSegment::Gap(answer) => {
                    let gap_index = position / 2;
                    let points = allocation.points(gap_index);
                    let feedback_ident = format!("{}_Response_0", gap_index);

                    presentation.push(response_field(gap_index));
                    rules.push(ScoringRule {
                        respident: gap_ident(gap_index),
                        value: answer.clone(),
                        condition: Condition::Equals,
                        points,
                        feedback_ref: feedback_ident.clone(),
                    });
                    feedback.push(feedback_stub(feedback_ident));
                    points_assigned += points;
                }
            }
        }

        Ok(RenderedQuestion {
            question_type: QuestionType::Gap,
            presentation,
            rules,
            feedback,
            report: RenderReport {
                kind: SubItemKind::Gaps,
                sub_items: gap_count,
                points_assigned,
            },
        })
    }
}

fn gap_ident(gap_index: usize) -> String {
    format!("gap_{}", gap_index)
}

/// 填空输入框
fn response_field(gap_index: usize) -> Element {
    Element::new("response_str")
        .attr("ident", gap_ident(gap_index))
        .attr("rcardinality", "Single")
        .child(
            Element::new("render_fib")
                .attr("fibtype", "String")
                .attr("prompt", "Box")
                .attr("columns", "0"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::renderer::format_points;

    fn render(body: &str) -> Result<RenderedQuestion, RenderError> {
        let record = QuestionRecord::new("il_0_qst_1", Some(QuestionType::Gap), "T").with_body(body);
        GapRenderer::new().unwrap().render(&record)
    }

    #[test]
    fn test_capital_scenario() {
        let rendered = render("The capital of France is [gap]Paris[/gap].").unwrap();

        assert_eq!(rendered.rules.len(), 1);
        let rule = &rendered.rules[0];
        assert_eq!(rule.respident, "gap_0");
        assert_eq!(rule.value, "Paris");
        assert_eq!(rule.condition, Condition::Equals);
        assert_eq!(rule.points, 1.0);
        assert!(rendered.rules_for("gap_0", "paris", Condition::Equals).is_empty());

        assert_eq!(rendered.report.sub_items, 1);
        assert_eq!(rendered.report.points_assigned, 1.0);
    }

    #[test]
    fn test_paragraph_wrappers_follow_position() {
        let rendered = render("[gap]a[/gap] middle [gap]b[/gap]").unwrap();
        let texts: Vec<String> = rendered
            .presentation
            .iter()
            .filter(|element| element.name() == "material")
            .map(|element| element.text_content())
            .collect();
        assert_eq!(texts, vec!["<p>", " middle ", "</p>"]);
    }

    #[test]
    fn test_presentation_interleaves_fields() {
        let rendered = render("x [gap]a[/gap] y [gap]b[/gap] z").unwrap();
        let names: Vec<&str> = rendered.presentation.iter().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["material", "response_str", "material", "response_str", "material"]
        );
        assert_eq!(rendered.presentation[3].attribute("ident"), Some("gap_1"));
    }

    #[test]
    fn test_points_sum_to_one() {
        for count in 1..=12 {
            let body: String = (0..count).map(|i| format!("w{} [gap]g{}[/gap] ", i, i)).collect();
            let rendered = render(&body).unwrap();
            let total: f64 = rendered.rules.iter().map(|rule| rule.points).sum();
            assert!((total - 1.0).abs() < 1e-9, "{} gaps total {}", count, total);
            assert_eq!(rendered.feedback.len(), count);
        }
    }

    #[test]
    fn test_three_gaps_last_absorbs_remainder() {
        let rendered = render("[gap]a[/gap][gap]b[/gap][gap]c[/gap]").unwrap();
        let points: Vec<f64> = rendered.rules.iter().map(|rule| rule.points).collect();
        assert_eq!(points[0], 0.33);
        assert_eq!(points[1], 0.33);
        assert!((points[2] - 0.34).abs() < 1e-9);
    }

    #[test]
    fn test_eight_gaps_share() {
        let body: String = (0..8).map(|i| format!("[gap]g{}[/gap] ", i)).collect();
        let rendered = render(&body).unwrap();
        let points: Vec<String> = rendered.rules.iter().map(|rule| format_points(rule.points)).collect();
        let mut expected = vec!["0.130000".to_string(); 7];
        expected.push("0.090000".to_string());
        assert_eq!(points, expected);
        assert!(!rendered.report.has_point_mismatch());
    }

    #[test]
    fn test_feedback_idents() {
        let rendered = render("[gap]a[/gap] [gap]b[/gap]").unwrap();
        let idents: Vec<_> = rendered.feedback.iter().map(|e| e.attribute("ident")).collect();
        assert_eq!(idents, vec![Some("0_Response_0"), Some("1_Response_0")]);
        assert_eq!(rendered.rules[1].feedback_ref, "1_Response_0");
    }

    #[test]
    fn test_no_gaps_is_an_error() {
        assert_eq!(
            render("nothing to fill"),
            Err(RenderError::NoGaps { id: "il_0_qst_1".to_string() })
        );
    }
}
