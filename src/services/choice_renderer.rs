//! 选择题渲染（单选 / 多选）

use crate::error::RenderError;
use crate::models::choice::{ChoiceOption, ChoiceQuestion};
use crate::models::question::{QuestionRecord, QuestionType};
use crate::models::score::ScoreAllocation;
use crate::services::renderer::{
    feedback_stub, material, Condition, RenderReport, RenderedQuestion, ScoringRule, SubItemKind,
};
use crate::xml::Element;

pub struct ChoiceRenderer {
    shuffle: bool,
}

impl ChoiceRenderer {
    pub fn new(shuffle: bool) -> Self {
        Self { shuffle }
    }

    /// 渲染选择题
    ///
    /// - 单选：正确选项被选中得 1 分，其余选项 0 分
    /// - 多选：每个选项按 1/选项数 计分（最后一个选项吸收舍入误差），
    ///   正确选项被选中得分、错误选项未被选中得分
    pub fn render(
        &self,
        record: &QuestionRecord,
        question_type: QuestionType,
    ) -> Result<RenderedQuestion, RenderError> {
        let question = ChoiceQuestion::parse(&record.body);
        if question.options.is_empty() {
            return Err(RenderError::NoOptions {
                id: record.id.clone(),
            });
        }

        let multi = question_type == QuestionType::ChoiceMulti;
        let respident = if multi { "MCMR" } else { "MCSR" };
        let allocation = multi.then(|| ScoreAllocation::uniform(question.options.len()));

        let mut labels = Vec::with_capacity(question.options.len());
        let mut rules = Vec::new();
        let mut feedback = Vec::with_capacity(question.options.len());
        let mut points_assigned = 0.0;

        for option in &question.options {
            let points = allocation
                .as_ref()
                .map_or(1.0, |allocation| allocation.points(option.index));
            let value = option.index.to_string();
            let selected_rule = |points: f64| ScoringRule {
                respident: respident.to_string(),
                value: value.clone(),
                condition: Condition::Equals,
                points,
                feedback_ref: format!("response_{}", option.index),
            };
            let unselected_rule = |points: f64| ScoringRule {
                respident: respident.to_string(),
                value: value.clone(),
                condition: Condition::NotEquals,
                points,
                feedback_ref: format!("Response_{}", option.index),
            };

            labels.push(answer_label(option));
            if option.correct {
                rules.push(selected_rule(points));
                points_assigned += points;
                if multi {
                    rules.push(unselected_rule(0.0));
                }
            } else {
                rules.push(selected_rule(0.0));
                if multi {
                    rules.push(unselected_rule(points));
                    points_assigned += points;
                }
            }
            feedback.push(feedback_stub(format!("response_{}", option.index)));
        }

        let presentation = vec![
            material(format!("<p>{}</p>", question.stem), "text/xhtml"),
            Element::new("response_lid")
                .attr("ident", respident)
                .attr("rcardinality", if multi { "Multiple" } else { "Single" })
                .child(
                    Element::new("render_choice")
                        .attr("shuffle", if self.shuffle { "Yes" } else { "No" })
                        .children(labels),
                ),
        ];

        Ok(RenderedQuestion {
            question_type,
            presentation,
            rules,
            feedback,
            report: RenderReport {
                kind: SubItemKind::AnswerChoices,
                sub_items: question.options.len(),
                points_assigned,
            },
        })
    }
}

fn answer_label(option: &ChoiceOption) -> Element {
    Element::new("response_label")
        .attr("ident", option.index.to_string())
        .child(material(option.text.as_str(), "text/plain"))
}
