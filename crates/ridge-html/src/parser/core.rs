use std::iter::Peekable;
use std::vec;

use ridge_dom::{Element, Node};

use crate::issue::{IssueKind, ParseIssue};
use crate::lexer::Token;
use crate::tags::ParseOptions;

/// Where appended content goes: the root list, or an element's children.
type Sink = Option<usize>;

/// A node under construction. Children are indices into the arena.
struct Entry {
    node: Node,
    children: Vec<usize>,
}

/// An element whose closing tag has not been seen yet.
struct OpenElement {
    /// Lower-cased tag name, for matching.
    name: String,
    /// Arena index of the element.
    id: usize,
    /// The sink the element was appended to.
    parent: Sink,
    /// Token index of the opening `TagStart`.
    position: usize,
}

/// Token-stream parser.
///
/// Two explicit stacks replace the call stack, so nesting depth is bounded
/// only by memory. `open` holds the elements a closing tag may match.
/// `levels` holds one sink per element entered; a closing tag leaves exactly
/// one level, even when it matched an ancestor further down `open`. An
/// auto-close rewinds both stacks to the rewound element's parent.
///
/// Nodes are appended to their parent when created and live in an arena
/// until the end, so a sink can be redirected without reordering siblings.
pub struct Parser<'a> {
    tokens: Peekable<vec::IntoIter<Token>>,
    options: &'a ParseOptions,
    /// Index of the next token to be consumed.
    position: usize,
    open: Vec<OpenElement>,
    levels: Vec<Sink>,
    arena: Vec<Entry>,
    roots: Vec<usize>,
    issues: Vec<ParseIssue>,
}

impl<'a> Parser<'a> {
    /// Create a parser over a token stream.
    #[must_use]
    pub fn new(tokens: Vec<Token>, options: &'a ParseOptions) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            options,
            position: 0,
            open: Vec::new(),
            levels: vec![None],
            arena: Vec::new(),
            roots: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Parse the whole stream into a forest.
    #[must_use]
    pub fn run(self) -> Vec<Node> {
        self.run_with_issues().0
    }

    /// Parse the whole stream, also returning the recoveries that were made.
    #[must_use]
    pub fn run_with_issues(mut self) -> (Vec<Node>, Vec<ParseIssue>) {
        while let Some(token) = self.next_token() {
            match token {
                Token::Text { content } => {
                    let _ = self.append(Node::Text { content });
                }
                Token::Comment { content } => {
                    let _ = self.append(Node::Comment { content });
                }
                Token::TagStart { closing } => {
                    let start = self.position - 1;
                    // A tag start without a name is dropped.
                    let Some(tag_name) = self.next_tag_name() else {
                        continue;
                    };
                    if closing {
                        self.close_tag(&tag_name, start);
                    } else {
                        self.open_tag(tag_name, start);
                    }
                }
                Token::TagName { .. } | Token::Attribute { .. } | Token::TagEnd { .. } => {}
            }
        }
        self.finish();
        let nodes = build(self.arena, &self.roots);
        (nodes, self.issues)
    }

    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.next()?;
        self.position += 1;
        Some(token)
    }

    fn next_token_if(&mut self, accept: impl FnOnce(&Token) -> bool) -> Option<Token> {
        let token = self.tokens.next_if(accept)?;
        self.position += 1;
        Some(token)
    }

    fn next_tag_name(&mut self) -> Option<String> {
        match self.next_token_if(|t| matches!(t, Token::TagName { .. })) {
            Some(Token::TagName { content }) => Some(content),
            _ => None,
        }
    }

    /// Attribute tokens up to and including the tag end. Returns whether the
    /// tag was self-closing; a missing tag end counts as `>`.
    fn collect_attributes(&mut self) -> (Vec<String>, bool) {
        let mut attributes = Vec::new();
        loop {
            match self.next_token_if(|t| matches!(t, Token::Attribute { .. } | Token::TagEnd { .. }))
            {
                Some(Token::Attribute { content }) => attributes.push(content),
                Some(Token::TagEnd { self_closing }) => return (attributes, self_closing),
                _ => return (attributes, false),
            }
        }
    }

    fn sink(&self) -> Sink {
        self.levels.last().copied().flatten()
    }

    /// Append a node to the current sink, returning its arena index.
    fn append(&mut self, node: Node) -> usize {
        let id = self.arena.len();
        self.arena.push(Entry {
            node,
            children: Vec::new(),
        });
        match self.sink() {
            Some(parent) => self.arena[parent].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    fn open_tag(&mut self, tag_name: String, start: usize) {
        let name = tag_name.to_lowercase();

        // Rewind to the parent of the nearest open element of the same name.
        if self.options.is_optionally_closing(&name)
            && !self.has_terminal_parent(&name)
            && let Some(depth) = self.open.iter().rposition(|open| open.name == name)
        {
            let parent = self.open[depth].parent;
            self.open.truncate(depth);
            // The levels entered since the parent end with the rewound element.
            match self.levels.iter().rposition(|&level| level == parent) {
                Some(index) => self.levels.truncate(index + 1),
                None => {
                    if let Some(level) = self.levels.last_mut() {
                        *level = parent;
                    }
                }
            }
        }

        let (attributes, self_closing) = self.collect_attributes();
        let parent = self.sink();
        let id = self.append(Node::Element(Element::new(tag_name, attributes)));
        if !self_closing && !self.options.is_void(&name) {
            self.open.push(OpenElement {
                name,
                id,
                parent,
                position: start,
            });
            self.levels.push(Some(id));
        }
    }

    /// Whether an ancestor breaker sits between the top of the stack and the
    /// nearest open element named `name`. When it does, a new `name` nests
    /// instead of closing the old one.
    fn has_terminal_parent(&self, name: &str) -> bool {
        let Some(breakers) = self.options.ancestor_breakers_for(name) else {
            return false;
        };
        for open in self.open.iter().rev() {
            if open.name == name {
                return false;
            }
            if breakers.contains(&open.name) {
                return true;
            }
        }
        false
    }

    fn close_tag(&mut self, tag_name: &str, start: usize) {
        let name = tag_name.to_lowercase();
        match self.open.iter().rposition(|open| open.name == name) {
            Some(depth) => {
                let options = self.options;
                let arena = &self.arena;
                let misnested = self
                    .open
                    .drain(depth..)
                    .skip(1)
                    .filter(|open| !options.is_optionally_closing(&open.name))
                    .map(|open| {
                        ParseIssue::for_tag(
                            IssueKind::MisnestedClosingTag,
                            tag_name_of(arena, open.id),
                            start,
                        )
                    });
                self.issues.extend(misnested);
                // Leave the current level only, whichever element matched.
                let _ = self.levels.pop();
            }
            None => self
                .issues
                .push(ParseIssue::for_tag(IssueKind::UnmatchedClosingTag, tag_name, start)),
        }

        // Closing tags carry no data.
        while self
            .next_token_if(|t| matches!(t, Token::Attribute { .. }))
            .is_some()
        {}
        while self
            .next_token_if(|t| matches!(t, Token::TagEnd { .. }))
            .is_some()
        {}
    }

    fn finish(&mut self) {
        let options = self.options;
        let arena = &self.arena;
        self.issues.extend(
            self.open
                .iter()
                .filter(|open| !options.is_optionally_closing(&open.name))
                .map(|open| {
                    ParseIssue::for_tag(
                        IssueKind::UnclosedElement,
                        tag_name_of(arena, open.id),
                        open.position,
                    )
                }),
        );
        self.open.clear();
    }
}

fn tag_name_of(arena: &[Entry], id: usize) -> &str {
    match &arena[id].node {
        Node::Element(element) => &element.tag_name,
        Node::Text { .. } | Node::Comment { .. } => "",
    }
}

/// Assemble the arena into owned trees. Children always come after their
/// parent, so one backwards pass finishes every child before its parent.
fn build(arena: Vec<Entry>, roots: &[usize]) -> Vec<Node> {
    let mut built: Vec<Option<Node>> = (0..arena.len()).map(|_| None).collect();
    for (id, Entry { mut node, children }) in arena.into_iter().enumerate().rev() {
        if let Node::Element(element) = &mut node {
            element.children = children
                .into_iter()
                .filter_map(|child| built[child].take())
                .collect();
        }
        built[id] = Some(node);
    }
    roots.iter().filter_map(|&id| built[id].take()).collect()
}
