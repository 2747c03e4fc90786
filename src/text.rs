//! A plain text format for trees that keeps their exact shape.
//!
//! Each node is written in pre-order as `{ content }` followed directly by its left and then its
//! right subtree, and a missing child is written as `{ _NULL_ }`:
//!
//! ```text
//! tree := node
//! node := "{ " ( "_NULL_" | content ) " }" [ node node ]
//! ```
//!
//! The two trailing nodes are only present after real content. `content` belongs to the element
//! type, which opts in by implementing [`WriteContent`] and [`ReadContent`]. Braces always stand
//! alone as tokens, so content must not contain `{` or `}`.
//!
//! # Examples
//!
//! ```
//! use plainbst::Tree;
//!
//! let tree: Tree<i32> = [2, 1].into_iter().collect();
//! let text = tree.serialize();
//! assert_eq!(text, "{ 2 }{ 1 }{ _NULL_ }{ _NULL_ }{ _NULL_ }");
//!
//! let copy: Tree<i32> = text.parse().unwrap();
//! assert_eq!(copy.serialize(), text);
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::error::{Result, TreeError};
use crate::node::{Node, OwnedNode};
use crate::tree::Tree;

/// Marker written in place of an absent child.
pub const NULL_MARKER: &str = "_NULL_";

const OPEN: &str = "{";
const CLOSE: &str = "}";

/// Element types that can write themselves into the tree text format.
pub trait WriteContent {
    /// Writes this value's content. It is surrounded by `{ ` and ` }` by the caller.
    fn write_content<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;
}

/// Element types that can read themselves back from the tree text format.
pub trait ReadContent: Sized {
    /// Consumes exactly the tokens [`WriteContent::write_content`] produced for one value.
    ///
    /// ## Errors
    ///
    /// [`TreeError::Deserialization`] if the tokens do not describe a value.
    fn read_content(tokens: &mut Tokens<'_>) -> Result<Self>;
}

/// A source of tokens over tree text. Tokens are separated by whitespace, and `{` and `}` are
/// always tokens of their own even when nothing separates them from their neighbours.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Tokenizes `text`.
    pub fn new(text: &'a str) -> Self {
        Self { rest: text }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start();
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }
        let len = if rest.starts_with(|c: char| c == '{' || c == '}') {
            1
        } else {
            rest.find(|c: char| c.is_whitespace() || c == '{' || c == '}')
                .unwrap_or(rest.len())
        };
        let (token, rest) = rest.split_at(len);
        self.rest = rest;
        Some(token)
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.clone().next_token()
    }

    /// Consumes the next token, failing unless it is `expected`.
    ///
    /// ## Errors
    ///
    /// [`TreeError::Deserialization`] naming what was expected and what was found.
    pub fn expect_token(&mut self, expected: &str) -> Result<()> {
        match self.next_token() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(malformed(format!("expected `{expected}`, found `{token}`"))),
            None => Err(malformed(format!("expected `{expected}`, found end of input"))),
        }
    }

    /// Whether only whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        self.peek().is_none()
    }
}

fn malformed(reason: String) -> TreeError {
    TreeError::Deserialization(reason)
}

/// Implements the content traits for types whose `Display` output is one token `FromStr` reads
/// back.
macro_rules! single_token_content {
    ($($ty:ty),* $(,)?) => {$(
        impl WriteContent for $ty {
            fn write_content<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
                write!(out, "{}", self)
            }
        }

        impl ReadContent for $ty {
            fn read_content(tokens: &mut Tokens<'_>) -> Result<Self> {
                let token = tokens.next_token().ok_or_else(|| {
                    malformed(format!("expected {}, found end of input", stringify!($ty)))
                })?;
                token
                    .parse()
                    .map_err(|_| malformed(format!("`{}` is not a valid {}", token, stringify!($ty))))
            }
        }
    )*};
}

single_token_content!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

/// Displays a tree in the text format. Created by [`Tree::text`].
pub struct Text<'a, T>(&'a Tree<T>);

impl<T> fmt::Display for Text<'_, T>
where
    T: WriteContent,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_text(f)
    }
}

impl<T> Tree<T>
where
    T: WriteContent,
{
    /// Writes the whole tree, starting at the root. An empty tree is written as `{ _NULL_ }`.
    pub fn write_text<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        // `None` entries stand for absent children and still have to be written.
        let mut stack: Vec<Option<&Node<T>>> = vec![self.root()];
        while let Some(entry) = stack.pop() {
            match entry.and_then(|node| node.payload().map(|content| (node, content))) {
                Some((node, content)) => {
                    out.write_str("{ ")?;
                    content.write_content(out)?;
                    out.write_str(" }")?;
                    stack.push(node.right());
                    stack.push(node.left());
                }
                None => write!(out, "{{ {} }}", NULL_MARKER)?,
            }
        }
        Ok(())
    }

    /// A [`Display`][fmt::Display] adapter writing the text format.
    pub fn text(&self) -> Text<'_, T> {
        Text(self)
    }

    /// The whole tree in the text format.
    pub fn serialize(&self) -> String {
        self.text().to_string()
    }
}

impl<T> Tree<T>
where
    T: ReadContent + Ord,
{
    /// Reads one tree from `tokens`, leaving anything after it unread. The shape is rebuilt
    /// exactly as written.
    ///
    /// ## Errors
    ///
    /// [`TreeError::Deserialization`] when a `{` or `}` is missing where the grammar needs one,
    /// the input ends early, an element rejects its content, or the described tree breaks the
    /// left `<=`, right `>` ordering.
    pub fn deserialize(tokens: &mut Tokens<'_>) -> Result<Self> {
        // Read the nodes in the order they were written. Every real node owes two more.
        let mut entries: Vec<Option<T>> = Vec::new();
        let mut pending = 1usize;
        while pending > 0 {
            tokens.expect_token(OPEN)?;
            pending -= 1;
            if tokens.peek() == Some(NULL_MARKER) {
                tokens.next_token();
                entries.push(None);
            } else {
                entries.push(Some(T::read_content(tokens)?));
                pending += 2;
            }
            tokens.expect_token(CLOSE)?;
        }

        // Walking pre-order backwards, a node's left subtree is always the last one finished and
        // its right subtree the one before.
        let mut len = 0;
        let mut built: Vec<Option<OwnedNode<T>>> = Vec::new();
        for entry in entries.into_iter().rev() {
            match entry {
                None => built.push(None),
                Some(content) => {
                    let mut node = Node::new_boxed(content);
                    node.set_left(built.pop().flatten());
                    node.set_right(built.pop().flatten());
                    built.push(Some(node));
                    len += 1;
                }
            }
        }
        let root = built.pop().flatten();
        check_order(root.as_deref())?;

        debug!("rebuilt tree of {} nodes from text", len);
        Ok(Tree::from_root(root, len))
    }
}

impl<T> FromStr for Tree<T>
where
    T: ReadContent + Ord,
{
    type Err = TreeError;

    /// Reads a tree that must make up the whole of `text`.
    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let tree = Self::deserialize(&mut tokens)?;
        match tokens.next_token() {
            None => Ok(tree),
            Some(token) => Err(malformed(format!("trailing input starting at `{token}`"))),
        }
    }
}

/// Checks every node against the bounds its ancestors impose: greater than the nearest ancestor
/// it sits right of, `<=` the nearest ancestor it sits left of.
fn check_order<T>(root: Option<&Node<T>>) -> Result<()>
where
    T: Ord,
{
    let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> =
        root.map(|n| (n, None, None)).into_iter().collect();
    while let Some((node, above, at_most)) = stack.pop() {
        let content = node.content()?;
        let fits = above.map_or(true, |low| content > low)
            && at_most.map_or(true, |high| content <= high);
        if !fits {
            return Err(malformed("tree text breaks the search order".to_string()));
        }
        stack.extend(node.left().map(|n| (n, above, Some(content))));
        stack.extend(node.right().map(|n| (n, Some(content), at_most)));
    }
    Ok(())
}
