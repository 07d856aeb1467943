//! 题库文档写出器
//!
//! 负责文档头尾和每道题 `<item>` 外层结构的拼装，题目内部的片段由渲染服务提供。

use crate::config::Config;
use crate::error::AppResult;
use crate::models::question::{QuestionRecord, QuestionType};
use crate::services::RenderedQuestion;
use crate::xml::element::Element;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

const ROOT_ELEMENT: &str = "questestinterop";
const DOCTYPE: &str = r#"questestinterop SYSTEM "ims_qtiasiv1p2p1.dtd""#;
const GENERATOR_COMMENT: &str = "Generated by ILIAS XmlWriter";

/// 每道题都相同的元数据
#[derive(Debug, Clone)]
struct ItemTemplate {
    ilias_version: String,
    author: String,
    duration: String,
}

/// 题库文档写出器
///
/// 调用顺序：`begin` → 若干次 `write_item` → `finish`。
pub struct PoolWriter<W: Write> {
    writer: Writer<W>,
    template: ItemTemplate,
    items_written: usize,
}

impl<W: Write> PoolWriter<W> {
    pub fn new(inner: W, config: &Config) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
            template: ItemTemplate {
                ilias_version: config.ilias_version.clone(),
                author: config.author.clone(),
                duration: config.duration.clone(),
            },
            items_written: 0,
        }
    }

    /// 写出 XML 声明、DOCTYPE 和根元素开始标签
    pub fn begin(&mut self) -> AppResult<()> {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        self.writer
            .write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;
        self.writer
            .write_event(Event::Comment(BytesText::from_escaped(GENERATOR_COMMENT)))?;
        self.writer
            .write_event(Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
        Ok(())
    }

    /// 写出一道题
    pub fn write_item(
        &mut self,
        record: &QuestionRecord,
        rendered: &RenderedQuestion,
    ) -> AppResult<()> {
        let item = self.build_item(record, rendered);
        item.write_to(&mut self.writer)?;
        self.items_written += 1;
        Ok(())
    }

    /// 写出根元素结束标签并返回底层写入目标
    pub fn finish(mut self) -> AppResult<W> {
        self.writer
            .write_event(Event::End(BytesEnd::new(ROOT_ELEMENT)))?;
        let mut inner = self.writer.into_inner();
        inner.write_all(b"\n")?;
        inner.flush()?;
        Ok(inner)
    }

    pub fn items_written(&self) -> usize {
        self.items_written
    }

    fn build_item(&self, record: &QuestionRecord, rendered: &RenderedQuestion) -> Element {
        Element::new("item")
            .attr("ident", record.id.as_str())
            .attr("title", record.title.as_str())
            .attr("maxattempts", "1")
            .child(Element::new("qticomment"))
            .child(Element::new("duration").text(self.template.duration.as_str()))
            .child(self.build_metadata(rendered.question_type))
            .child(
                Element::new("presentation")
                    .attr("label", record.title.as_str())
                    .child(Element::new("flow").children(rendered.presentation.iter().cloned())),
            )
            .child(
                Element::new("resprocessing")
                    .child(Element::new("outcomes").child(Element::new("decvar")))
                    .children(rendered.resprocessing()),
            )
            .children(rendered.feedback.iter().cloned())
    }

    fn build_metadata(&self, question_type: QuestionType) -> Element {
        let fields = [
            ("ILIAS_VERSION", self.template.ilias_version.as_str()),
            ("QUESTIONTYPE", question_type.ilias_name()),
            ("AUTHOR", self.template.author.as_str()),
            ("textgaprating", "cs"),
            ("fixedTextLength", ""),
            ("identicalScoring", "1"),
        ];

        Element::new("itemmetadata").child(
            Element::new("qtimetadata").children(fields.iter().map(|(label, entry)| {
                let entry_element = if entry.is_empty() {
                    Element::new("fieldentry")
                } else {
                    Element::new("fieldentry").text(*entry)
                };
                Element::new("qtimetadatafield")
                    .child(Element::new("fieldlabel").text(*label))
                    .child(entry_element)
            })),
        )
    }
}
