use serde::{Deserialize, Serialize};

/// Block kinds understood by the engine.
///
/// This is a closed enumeration: hosts cannot register new kinds at runtime.
/// `Paragraph` is the only kind that does not qualify a gap for the
/// click-to-insert affordance (see [`BlockKind::is_gap_block`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    CodeBlock,
    MathBlock,
    DiagramBlock,
    Frontmatter,
    Image,
    Table,
    HorizontalRule,
    Blockquote,
    BulletList,
    OrderedList,
    TaskList,
}

impl BlockKind {
    /// Whether a gap adjacent to this kind gets the insert/move-caret
    /// affordance.
    ///
    /// The allow-list is fixed at compile time and written out as a positive
    /// match so that adding a kind to the enum forces a decision here.
    pub fn is_gap_block(self) -> bool {
        matches!(
            self,
            BlockKind::Heading { .. }
                | BlockKind::CodeBlock
                | BlockKind::MathBlock
                | BlockKind::DiagramBlock
                | BlockKind::Frontmatter
                | BlockKind::Image
                | BlockKind::Table
                | BlockKind::HorizontalRule
                | BlockKind::Blockquote
                | BlockKind::BulletList
                | BlockKind::OrderedList
                | BlockKind::TaskList
        )
    }

    /// Atoms have no interior: they occupy a single unit of the position
    /// space and positions can never resolve inside them.
    pub fn is_atom(self) -> bool {
        matches!(self, BlockKind::Image | BlockKind::HorizontalRule)
    }
}

/// What a block holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    /// Inline text (paragraphs, headings, fenced blocks, frontmatter).
    Text(String),
    /// Nested child blocks (quotes, lists, tables).
    Children(Vec<Block>),
    /// No interior (image, horizontal rule).
    Empty,
}

/// A single node in the block tree.
///
/// Blocks are built through the kind-specific constructors so that kind and
/// content always agree (an atom never carries children, a list never carries
/// raw text).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    kind: BlockKind,
    content: Content,
}

impl Block {
    pub fn paragraph(text: &str) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            content: Content::Text(text.to_string()),
        }
    }

    pub fn empty_paragraph() -> Self {
        Self::paragraph("")
    }

    pub fn heading(level: u8, text: &str) -> Self {
        Self {
            kind: BlockKind::Heading { level },
            content: Content::Text(text.to_string()),
        }
    }

    pub fn code(text: &str) -> Self {
        Self {
            kind: BlockKind::CodeBlock,
            content: Content::Text(text.to_string()),
        }
    }

    pub fn math(text: &str) -> Self {
        Self {
            kind: BlockKind::MathBlock,
            content: Content::Text(text.to_string()),
        }
    }

    pub fn diagram(text: &str) -> Self {
        Self {
            kind: BlockKind::DiagramBlock,
            content: Content::Text(text.to_string()),
        }
    }

    pub fn frontmatter(text: &str) -> Self {
        Self {
            kind: BlockKind::Frontmatter,
            content: Content::Text(text.to_string()),
        }
    }

    pub fn image() -> Self {
        Self {
            kind: BlockKind::Image,
            content: Content::Empty,
        }
    }

    pub fn rule() -> Self {
        Self {
            kind: BlockKind::HorizontalRule,
            content: Content::Empty,
        }
    }

    pub fn quote(children: Vec<Block>) -> Self {
        Self {
            kind: BlockKind::Blockquote,
            content: Content::Children(children),
        }
    }

    pub fn bullet_list(children: Vec<Block>) -> Self {
        Self {
            kind: BlockKind::BulletList,
            content: Content::Children(children),
        }
    }

    pub fn ordered_list(children: Vec<Block>) -> Self {
        Self {
            kind: BlockKind::OrderedList,
            content: Content::Children(children),
        }
    }

    pub fn task_list(children: Vec<Block>) -> Self {
        Self {
            kind: BlockKind::TaskList,
            content: Content::Children(children),
        }
    }

    pub fn table(children: Vec<Block>) -> Self {
        Self {
            kind: BlockKind::Table,
            content: Content::Children(children),
        }
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Size of the block's interior in the linear position space.
    pub fn content_size(&self) -> usize {
        match &self.content {
            Content::Text(text) => text.chars().count(),
            Content::Children(children) => children.iter().map(Block::node_size).sum(),
            Content::Empty => 0,
        }
    }

    /// Total distance this node occupies in the linear position space.
    ///
    /// Atoms occupy a single unit. Everything else occupies its content plus
    /// one unit for entering and one for leaving the node.
    pub fn node_size(&self) -> usize {
        if self.kind.is_atom() {
            1
        } else {
            self.content_size() + 2
        }
    }

    pub fn is_empty_paragraph(&self) -> bool {
        self.kind == BlockKind::Paragraph && self.content_size() == 0
    }

    /// Compact structural rendering, used by [`Doc::outline`].
    fn outline(&self) -> String {
        let name = match self.kind {
            BlockKind::Paragraph => "p".to_string(),
            BlockKind::Heading { level } => format!("h{level}"),
            BlockKind::CodeBlock => "code".to_string(),
            BlockKind::MathBlock => "math".to_string(),
            BlockKind::DiagramBlock => "diagram".to_string(),
            BlockKind::Frontmatter => "frontmatter".to_string(),
            BlockKind::Image => "image".to_string(),
            BlockKind::Table => "table".to_string(),
            BlockKind::HorizontalRule => "hr".to_string(),
            BlockKind::Blockquote => "quote".to_string(),
            BlockKind::BulletList => "ul".to_string(),
            BlockKind::OrderedList => "ol".to_string(),
            BlockKind::TaskList => "tasks".to_string(),
        };
        match &self.content {
            Content::Text(text) => format!("{name}({text})"),
            Content::Children(children) => format!("{name}[{}]", outline_of(children)),
            Content::Empty => name,
        }
    }
}

fn outline_of(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(Block::outline)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The block document.
///
/// Holds the top-level block sequence plus the current selection (a range in
/// the linear position space, empty range = caret) and a version counter that
/// is bumped on every applied command, so hosts can cheaply detect changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub(crate) blocks: Vec<Block>,
    pub(crate) selection: std::ops::Range<usize>,
    pub(crate) version: u64,
}

impl Doc {
    /// Create a document from top-level blocks, with the caret parked at the
    /// end.
    pub fn new(blocks: Vec<Block>) -> Self {
        let size = blocks.iter().map(Block::node_size).sum();
        Self {
            blocks,
            selection: size..size,
            version: 0,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn child_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn child(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Total size of the document's content; also the largest valid position.
    pub fn content_size(&self) -> usize {
        self.blocks.iter().map(Block::node_size).sum()
    }

    /// Position of the boundary before the top-level child at `index`.
    ///
    /// `index == child_count()` yields the position after the last child.
    pub fn boundary_before(&self, index: usize) -> usize {
        self.blocks[..index].iter().map(Block::node_size).sum()
    }

    /// Get the current selection range.
    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range.
    pub fn set_selection(&mut self, selection: std::ops::Range<usize>) {
        self.selection = selection;
    }

    /// Get the current version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// One-line structural rendering of the document, e.g.
    /// `h1(Title) p() table[]`. Stable output, used by snapshot tests.
    pub fn outline(&self) -> String {
        outline_of(&self.blocks)
    }
}
