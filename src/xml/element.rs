//! 轻量的 XML 元素树
//!
//! 渲染结果先构建成元素树，再统一交给 quick-xml 写出，转义由写出器负责。

use crate::error::AppResult;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// 元素的子节点
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// 深度优先查找所有同名后代元素（包括自身）
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_named(name, found);
        }
    }

    /// 拼接所有后代文本节点
    pub fn text_content(&self) -> String {
        let mut content = String::new();
        for node in &self.children {
            match node {
                Node::Text(text) => content.push_str(text),
                Node::Element(element) => content.push_str(&element.text_content()),
            }
        }
        content
    }

    /// 写出元素；没有子节点时写成自闭合标签
    pub fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> AppResult<()> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for node in &self.children {
            match node {
                Node::Element(element) => element.write_to(writer)?,
                Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.name.as_str())))?;
        Ok(())
    }

    /// 写成字符串（不缩进），主要用于日志和测试
    pub fn to_xml_string(&self) -> AppResult<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| crate::error::AppError::Other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_element_is_self_closing() {
        let element = Element::new("decvar");
        assert_eq!(element.to_xml_string().unwrap(), "<decvar/>");
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let element = Element::new("mattext")
            .attr("label", "a \"quoted\" & <b>")
            .text("<p>Stem<br/>more</p>");
        let xml = element.to_xml_string().unwrap();
        assert!(xml.contains("&lt;p&gt;Stem&lt;br/&gt;more&lt;/p&gt;"));
        assert!(xml.contains("&quot;quoted&quot; &amp; &lt;b&gt;"));
    }

    #[test]
    fn test_find_all_and_text_content() {
        let element = Element::new("flow")
            .child(Element::new("material").child(Element::new("mattext").text("one")))
            .child(Element::new("material").child(Element::new("mattext").text("two")));
        let mattexts = element.find_all("mattext");
        assert_eq!(mattexts.len(), 2);
        assert_eq!(element.text_content(), "onetwo");
    }

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new("response_str").attr("ident", "gap_0").attr("rcardinality", "Single");
        assert_eq!(element.attribute("ident"), Some("gap_0"));
        assert_eq!(element.attribute("missing"), None);
    }
}
