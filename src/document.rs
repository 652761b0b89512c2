//! The parsed document tree.
//!
//! Nodes form a polymorphic tree expressed as a tagged sum type: every
//! variant carries its own payload struct, and container kinds own an
//! ordered [`NodeList`] of children. Serialization follows the JSON
//! contract used by the golden tests: every node object has a mandatory
//! `"type"` key holding the kind name (`"NodeSection"`, …), camelCase
//! position fields (omitted when zero), and a `"nodeList"` array that is
//! always present for containers, never `null`.

use crate::messages::{MessageType, Severity};
use crate::token::Token;
use serde::{Serialize, Serializer};

/// An ordered list of child nodes.
pub type NodeList = Vec<Node>;

fn is_zero(n: &usize) -> bool {
    *n == 0
}

// Embedded nodes (a section's title and adornments, a definition item's
// term and definition) serialize through the enum so they carry the same
// mandatory "type" key as list children.
fn title_as_node<S: Serializer>(title: &TitleNode, s: S) -> Result<S::Ok, S::Error> {
    Node::Title(title.clone()).serialize(s)
}

fn adornment_as_node<S: Serializer>(adornment: &AdornmentNode, s: S) -> Result<S::Ok, S::Error> {
    Node::Adornment(adornment.clone()).serialize(s)
}

fn opt_adornment_as_node<S: Serializer>(
    adornment: &Option<AdornmentNode>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match adornment {
        Some(a) => adornment_as_node(a, s),
        None => s.serialize_none(),
    }
}

fn term_as_node<S: Serializer>(term: &DefinitionTermNode, s: S) -> Result<S::Ok, S::Error> {
    Node::DefinitionTerm(term.clone()).serialize(s)
}

fn definition_as_node<S: Serializer>(def: &DefinitionNode, s: S) -> Result<S::Ok, S::Error> {
    Node::Definition(def.clone()).serialize(s)
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    #[serde(rename = "NodeSection")]
    Section(SectionNode),
    #[serde(rename = "NodeTitle")]
    Title(TitleNode),
    #[serde(rename = "NodeAdornment")]
    Adornment(AdornmentNode),
    #[serde(rename = "NodeParagraph")]
    Paragraph(ParagraphNode),
    #[serde(rename = "NodeText")]
    Text(TextNode),
    #[serde(rename = "NodeBlockQuote")]
    BlockQuote(BlockQuoteNode),
    #[serde(rename = "NodeSystemMessage")]
    SystemMessage(SystemMessageNode),
    #[serde(rename = "NodeSystemMessages")]
    SystemMessages(SystemMessagesNode),
    #[serde(rename = "NodeLiteralBlock")]
    LiteralBlock(LiteralBlockNode),
    #[serde(rename = "NodeTransition")]
    Transition(TransitionNode),
    #[serde(rename = "NodeComment")]
    Comment(CommentNode),
    #[serde(rename = "NodeBulletList")]
    BulletList(BulletListNode),
    #[serde(rename = "NodeBulletListItem")]
    BulletListItem(BulletListItemNode),
    #[serde(rename = "NodeEnumList")]
    EnumList(EnumListNode),
    #[serde(rename = "NodeDefinitionList")]
    DefinitionList(DefinitionListNode),
    #[serde(rename = "NodeDefinitionListItem")]
    DefinitionListItem(DefinitionListItemNode),
    #[serde(rename = "NodeDefinitionTerm")]
    DefinitionTerm(DefinitionTermNode),
    #[serde(rename = "NodeDefinition")]
    Definition(DefinitionNode),
    #[serde(rename = "NodeInlineEmphasis")]
    InlineEmphasis(InlineMarkupNode),
    #[serde(rename = "NodeInlineStrong")]
    InlineStrong(InlineMarkupNode),
    #[serde(rename = "NodeInlineLiteral")]
    InlineLiteral(InlineMarkupNode),
    #[serde(rename = "NodeInlineInterpretedText")]
    InlineInterpretedText(InterpretedTextNode),
    #[serde(rename = "NodeInlineInterpretedTextRole")]
    InlineInterpretedTextRole(InlineMarkupNode),
}

impl Node {
    /// The serialized kind name of this node.
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Section(_) => "NodeSection",
            Node::Title(_) => "NodeTitle",
            Node::Adornment(_) => "NodeAdornment",
            Node::Paragraph(_) => "NodeParagraph",
            Node::Text(_) => "NodeText",
            Node::BlockQuote(_) => "NodeBlockQuote",
            Node::SystemMessage(_) => "NodeSystemMessage",
            Node::SystemMessages(_) => "NodeSystemMessages",
            Node::LiteralBlock(_) => "NodeLiteralBlock",
            Node::Transition(_) => "NodeTransition",
            Node::Comment(_) => "NodeComment",
            Node::BulletList(_) => "NodeBulletList",
            Node::BulletListItem(_) => "NodeBulletListItem",
            Node::EnumList(_) => "NodeEnumList",
            Node::DefinitionList(_) => "NodeDefinitionList",
            Node::DefinitionListItem(_) => "NodeDefinitionListItem",
            Node::DefinitionTerm(_) => "NodeDefinitionTerm",
            Node::Definition(_) => "NodeDefinition",
            Node::InlineEmphasis(_) => "NodeInlineEmphasis",
            Node::InlineStrong(_) => "NodeInlineStrong",
            Node::InlineLiteral(_) => "NodeInlineLiteral",
            Node::InlineInterpretedText(_) => "NodeInlineInterpretedText",
            Node::InlineInterpretedTextRole(_) => "NodeInlineInterpretedTextRole",
        }
    }

    /// The child list of this node, for kinds that own one.
    pub fn node_list(&self) -> Option<&NodeList> {
        match self {
            Node::Section(n) => Some(&n.node_list),
            Node::Title(n) => Some(&n.node_list),
            Node::Paragraph(n) => Some(&n.node_list),
            Node::BlockQuote(n) => Some(&n.node_list),
            Node::SystemMessage(n) => Some(&n.node_list),
            Node::SystemMessages(n) => Some(&n.node_list),
            Node::BulletList(n) => Some(&n.node_list),
            Node::BulletListItem(n) => Some(&n.node_list),
            Node::EnumList(n) => Some(&n.node_list),
            Node::DefinitionList(n) => Some(&n.node_list),
            Node::Definition(n) => Some(&n.node_list),
            Node::InlineInterpretedText(n) => Some(&n.node_list),
            _ => None,
        }
    }

    pub fn as_system_message(&self) -> Option<&SystemMessageNode> {
        match self {
            Node::SystemMessage(n) => Some(n),
            _ => None,
        }
    }
}

/// Counts `SystemMessage` nodes anywhere under `nodes`, including the
/// definition-list item term/definition slots that live outside node lists.
pub fn system_message_count(nodes: &[Node]) -> usize {
    let mut count = 0;
    for node in nodes {
        if matches!(node, Node::SystemMessage(_)) {
            count += 1;
        }
        if let Some(children) = node.node_list() {
            count += system_message_count(children);
        }
        if let Node::DefinitionListItem(item) = node {
            count += system_message_count(&item.definition.node_list);
        }
    }
    count
}

/// A section and its subtree. `level` is assigned by the section-level
/// registry; the first adornment pattern encountered is level 1.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionNode {
    #[serde(skip)]
    pub id: u32,
    pub level: usize,
    #[serde(serialize_with = "title_as_node")]
    pub title: TitleNode,
    #[serde(serialize_with = "opt_adornment_as_node")]
    pub over_line: Option<AdornmentNode>,
    #[serde(serialize_with = "adornment_as_node")]
    pub under_line: AdornmentNode,
    pub node_list: NodeList,
}

impl SectionNode {
    /// Builds a section skeleton from the lexed title, adornment, and
    /// optional indent tokens. The level is filled in by the registry.
    pub(crate) fn new(
        id: u32,
        title: &Token,
        over_adorn: Option<&Token>,
        under_adorn: &Token,
        indent: Option<&Token>,
    ) -> Self {
        let indent_length = indent.map_or(0, |t| t.length);
        SectionNode {
            id,
            level: 0,
            title: TitleNode::from_token(title, indent_length),
            over_line: over_adorn.map(AdornmentNode::from_token),
            under_line: AdornmentNode::from_token(under_adorn),
            node_list: NodeList::new(),
        }
    }
}

/// A section title. The title text lives in a `Text` child.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleNode {
    #[serde(skip_serializing_if = "is_zero")]
    pub indent_length: usize,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
    pub node_list: NodeList,
}

impl TitleNode {
    pub(crate) fn from_token(token: &Token, indent_length: usize) -> Self {
        TitleNode {
            indent_length,
            length: token.length,
            line: token.line,
            start_position: token.start_position,
            node_list: vec![Node::Text(TextNode::from_token(token))],
        }
    }

    /// The concatenated text of the title's `Text` children.
    pub fn text(&self) -> String {
        self.node_list
            .iter()
            .filter_map(|n| match n {
                Node::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// A section overline or underline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdornmentNode {
    pub rune: char,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl AdornmentNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        AdornmentNode {
            rune: token.text.chars().next().unwrap_or(' '),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
        }
    }
}

/// Ordinary text, typically a child of a paragraph or title.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl TextNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        TextNode {
            text: token.text.clone(),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
        }
    }

    pub(crate) fn from_message(text: &str) -> Self {
        TextNode {
            text: text.to_string(),
            length: text.chars().count(),
            line: 0,
            start_position: 0,
        }
    }

    /// Appends continuation text, keeping the rune length in sync.
    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.length = self.text.chars().count();
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphNode {
    pub node_list: NodeList,
}

impl ParagraphNode {
    pub(crate) fn new() -> Self {
        ParagraphNode::default()
    }

    pub(crate) fn with_text(token: &Token) -> Self {
        ParagraphNode {
            node_list: vec![Node::Text(TextNode::from_token(token))],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockQuoteNode {
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
    pub node_list: NodeList,
}

impl BlockQuoteNode {
    pub(crate) fn new(token: &Token) -> Self {
        BlockQuoteNode {
            line: token.line,
            start_position: token.start_position,
            node_list: vec![Node::Paragraph(ParagraphNode::with_text(token))],
        }
    }

}

/// A diagnostic produced while parsing. The first child is always a `Text`
/// node with the human-readable message; a `LiteralBlock` reconstruction of
/// the offending source follows when literal context exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMessageNode {
    pub message_type: MessageType,
    pub severity: Severity,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub end_line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
    pub node_list: NodeList,
}

impl SystemMessageNode {
    pub(crate) fn new(message_type: MessageType, line: usize) -> Self {
        SystemMessageNode {
            message_type,
            severity: message_type.severity(),
            line,
            start_line: 0,
            end_line: 0,
            start_position: 0,
            node_list: vec![Node::Text(TextNode::from_message(message_type.message()))],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMessagesNode {
    pub node_list: NodeList,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiteralBlockNode {
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl LiteralBlockNode {
    pub(crate) fn new(text: String, line: usize) -> Self {
        let length = text.chars().count();
        LiteralBlockNode {
            text,
            length,
            line,
            start_position: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionNode {
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl TransitionNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        TransitionNode {
            text: token.text.clone(),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
        }
    }
}

/// A comment. Empty comments (`..` alone) have no text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl CommentNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        CommentNode {
            text: Some(token.text.clone()),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
        }
    }

    pub(crate) fn empty(line: usize, start_position: usize) -> Self {
        CommentNode {
            text: None,
            length: 0,
            line,
            start_position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletListNode {
    pub bullet: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    pub node_list: NodeList,
}

impl BulletListNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        BulletListNode {
            bullet: token.text.clone(),
            line: token.line,
            node_list: NodeList::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletListItemNode {
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    pub node_list: NodeList,
}

impl BulletListItemNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        BulletListItemNode {
            line: token.line,
            node_list: NodeList::new(),
        }
    }
}

/// The enumeration style of an enumerated list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnumListType {
    #[serde(rename = "enumListArabic")]
    Arabic,
    #[serde(rename = "enumListUpperAlpha")]
    UpperAlpha,
    #[serde(rename = "enumListLowerAlpha")]
    LowerAlpha,
    #[serde(rename = "enumListUpperRoman")]
    UpperRoman,
    #[serde(rename = "enumListLowerRoman")]
    LowerRoman,
    #[serde(rename = "enumListAuto")]
    Auto,
}

/// The affix style of an enumerated list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EnumAffixType {
    #[serde(rename = "enumAffixPeriod")]
    Period,
    #[serde(rename = "enumAffixParenthesisSurround")]
    ParenthesisSurround,
    #[serde(rename = "enumAffixParenthesisRight")]
    ParenthesisRight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumListNode {
    pub enum_type: EnumListType,
    pub affix: EnumAffixType,
    pub node_list: NodeList,
}

impl EnumListNode {
    /// Derives the enumeration and affix styles from the enumerator token
    /// text (`"1."`, `"2)"`, `"(3)"`).
    pub(crate) fn from_token(token: &Token) -> Self {
        let affix = if token.text.starts_with('(') {
            EnumAffixType::ParenthesisSurround
        } else if token.text.ends_with(')') {
            EnumAffixType::ParenthesisRight
        } else {
            EnumAffixType::Period
        };
        EnumListNode {
            enum_type: EnumListType::Arabic,
            affix,
            node_list: NodeList::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionListNode {
    pub node_list: NodeList,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionListItemNode {
    #[serde(serialize_with = "term_as_node")]
    pub term: DefinitionTermNode,
    #[serde(serialize_with = "definition_as_node")]
    pub definition: DefinitionNode,
}

impl DefinitionListItemNode {
    pub(crate) fn from_token(term: &Token) -> Self {
        DefinitionListItemNode {
            term: DefinitionTermNode::from_token(term),
            definition: DefinitionNode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionTermNode {
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl DefinitionTermNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        DefinitionTermNode {
            text: token.text.clone(),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionNode {
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    pub node_list: NodeList,
}

/// Shared payload of the leaf inline markup kinds (emphasis, strong,
/// literal, interpreted text role).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineMarkupNode {
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
}

impl InlineMarkupNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        InlineMarkupNode {
            text: token.text.clone(),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
        }
    }
}

/// Interpreted text; its role, when given, is a child node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpretedTextNode {
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub line: usize,
    #[serde(skip_serializing_if = "is_zero")]
    pub start_position: usize,
    pub node_list: NodeList,
}

impl InterpretedTextNode {
    pub(crate) fn from_token(token: &Token) -> Self {
        InterpretedTextNode {
            text: token.text.clone(),
            length: token.length,
            line: token.line,
            start_position: token.start_position,
            node_list: NodeList::new(),
        }
    }
}

/// The result of a parse: the root node list plus the flat diagnostics
/// list. The same `SystemMessage` appears in both its structural parent's
/// children and in `messages`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub nodes: NodeList,
    pub messages: NodeList,
}

impl Document {
    /// Serializes the root node list to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.nodes)
    }

    /// Serializes the flat messages list to pretty-printed JSON.
    pub fn messages_to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;
    use serde_json::{Value, json};

    fn token(kind: TokenKind, line: usize, pos: usize, text: &str) -> Token {
        Token::new(1, kind, line, pos, text.to_string())
    }

    #[test]
    fn section_json_shape() {
        let title = token(TokenKind::Title, 1, 1, "Title");
        let under = token(TokenKind::SectionAdornment, 2, 1, "=====");
        let mut section = SectionNode::new(1, &title, None, &under, None);
        section.level = 1;

        let value: Value = serde_json::to_value(Node::Section(section)).unwrap();
        assert_eq!(value["type"], json!("NodeSection"));
        assert_eq!(value["level"], json!(1));
        assert_eq!(value["overLine"], Value::Null);
        assert_eq!(value["title"]["type"], json!("NodeTitle"));
        assert_eq!(value["underLine"]["type"], json!("NodeAdornment"));
        assert_eq!(value["underLine"]["rune"], json!("="));
        assert_eq!(value["underLine"]["length"], json!(5));
        assert_eq!(value["title"]["nodeList"][0]["type"], json!("NodeText"));
        assert_eq!(value["nodeList"], json!([]));
    }

    #[test]
    fn zero_positions_are_omitted() {
        let text = TextNode::from_message("Title underline too short.");
        let value: Value = serde_json::to_value(Node::Text(text)).unwrap();
        assert!(value.get("line").is_none());
        assert!(value.get("startPosition").is_none());
        assert_eq!(value["length"], json!(26));
    }

    #[test]
    fn system_message_json_shape() {
        let sm = SystemMessageNode::new(MessageType::SectionWarningShortUnderline, 2);
        let value: Value = serde_json::to_value(Node::SystemMessage(sm)).unwrap();
        assert_eq!(value["type"], json!("NodeSystemMessage"));
        assert_eq!(value["messageType"], json!("SectionWarningShortUnderline"));
        assert_eq!(value["severity"], json!("WARNING"));
        assert_eq!(value["line"], json!(2));
        assert_eq!(value["nodeList"][0]["type"], json!("NodeText"));
    }

    #[test]
    fn title_text_concatenates_children() {
        let title = TitleNode::from_token(&token(TokenKind::Title, 1, 1, "A Title"), 0);
        assert_eq!(title.text(), "A Title");
    }

    #[test]
    fn message_count_descends_containers() {
        let sm = SystemMessageNode::new(MessageType::SectionWarningShortUnderline, 2);
        let title = token(TokenKind::Title, 1, 1, "Title");
        let under = token(TokenKind::SectionAdornment, 2, 1, "=");
        let mut section = SectionNode::new(1, &title, None, &under, None);
        section.node_list.push(Node::SystemMessage(sm));
        let nodes = vec![Node::Section(section)];
        assert_eq!(system_message_count(&nodes), 1);
    }

    #[test]
    fn enum_list_affix_from_token_text() {
        let period = EnumListNode::from_token(&token(TokenKind::EnumListArabic, 1, 1, "1."));
        assert_eq!(period.affix, EnumAffixType::Period);
        let right = EnumListNode::from_token(&token(TokenKind::EnumListArabic, 1, 1, "2)"));
        assert_eq!(right.affix, EnumAffixType::ParenthesisRight);
        let surround = EnumListNode::from_token(&token(TokenKind::EnumListArabic, 1, 1, "(3)"));
        assert_eq!(surround.affix, EnumAffixType::ParenthesisSurround);
    }

    #[test]
    fn round_trip_is_isomorphic() {
        let title = token(TokenKind::Title, 1, 1, "Title");
        let under = token(TokenKind::SectionAdornment, 2, 1, "=====");
        let mut section = SectionNode::new(1, &title, None, &under, None);
        section.level = 1;
        section
            .node_list
            .push(Node::Paragraph(ParagraphNode::with_text(&token(
                TokenKind::Text,
                4,
                1,
                "Paragraph.",
            ))));
        let nodes = vec![Node::Section(section)];

        let serialized = serde_json::to_string(&nodes).unwrap();
        let reparsed: Value = serde_json::from_str(&serialized).unwrap();
        let reserialized = serde_json::to_string(&reparsed).unwrap();
        let reparsed_again: Value = serde_json::from_str(&reserialized).unwrap();
        assert_eq!(reparsed, reparsed_again);
    }
}
