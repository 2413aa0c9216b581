//! Singly linked, owned text list backing the environment, alias and history state.

use crate::output::BufferedWriter;
use std::io::Write;

/// A single entry in a [`List`]. Each node is owned by its predecessor.
#[derive(Debug)]
pub struct Node {
    index: i32,
    text: String,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(text: impl Into<String>, index: i32) -> Self {
        Node {
            index,
            text: text.into(),
            next: None,
        }
    }

    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Forward chain of owned nodes.
#[derive(Debug, Default)]
pub struct List {
    head: Option<Box<Node>>,
}

impl List {
    pub fn new() -> Self {
        List { head: None }
    }

    pub fn head(&self) -> Option<&Node> {
        self.head.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Link a new node before the current head.
    pub fn push_front(&mut self, text: impl Into<String>, index: i32) -> &Node {
        let mut node = Box::new(Node::new(text, index));
        node.next = self.head.take();
        &**self.head.insert(node)
    }

    /// Link a new node after the current tail and return it.
    pub fn push_back(&mut self, text: impl Into<String>, index: i32) -> &Node {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        &**cursor.insert(Box::new(Node::new(text, index)))
    }

    /// Position of `target` in this list, compared by identity.
    ///
    /// `None` covers both a missing target and a node that belongs to another list.
    pub fn index_of(&self, target: Option<&Node>) -> Option<usize> {
        let target = target?;
        self.iter().position(|node| std::ptr::eq(node, target))
    }

    /// First node whose text begins with `prefix`.
    ///
    /// With a `stop` character the byte right after the prefix must be exactly that
    /// character, so `starts_with("ls", Some('='))` matches `ls=...` but not `lsd=...`.
    pub fn starts_with(&self, prefix: &str, stop: Option<char>) -> Option<&Node> {
        self.iter().find(|node| match node.text.strip_prefix(prefix) {
            Some(rest) => match stop {
                Some(stop) => rest.starts_with(stop),
                None => true,
            },
            None => false,
        })
    }

    /// Mutable counterpart of [`List::starts_with`].
    pub fn starts_with_mut(&mut self, prefix: &str, stop: Option<char>) -> Option<&mut Node> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            let matched = match node.text.strip_prefix(prefix) {
                Some(rest) => match stop {
                    Some(stop) => rest.starts_with(stop),
                    None => true,
                },
                None => false,
            };
            if matched {
                return Some(node);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Unlink and drop the node at `index`. Returns `false` when out of range.
    pub fn delete_at(&mut self, index: usize) -> bool {
        let mut cursor = &mut self.head;
        for _ in 0..index {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => return false,
            }
        }

        match cursor.take() {
            Some(mut removed) => {
                *cursor = removed.next.take();
                true
            }
            None => false,
        }
    }

    /// Drop every node. Safe to call on an empty list.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }

    /// Rewrite every index to its position and return the node count.
    pub fn renumber(&mut self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            node.index = count as i32;
            count += 1;
            cursor = node.next.as_deref_mut();
        }
        count
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(|node| node.text.clone()).collect()
    }

    /// Write every node as `<index>: <text>` and return the number of nodes written.
    pub fn print<W: Write>(&self, out: &mut BufferedWriter<W>) -> usize {
        let mut count = 0;
        for node in self.iter() {
            out.put_str(Some(node.index.to_string().as_str()));
            out.put_str(Some(": "));
            out.put_str(Some(node.text.as_str()));
            out.put_str(Some("\n"));
            count += 1;
        }
        count
    }

    /// Write only the text of every node, one per line.
    pub fn print_text<W: Write>(&self, out: &mut BufferedWriter<W>) -> usize {
        let mut count = 0;
        for node in self.iter() {
            out.put_str(Some(node.text.as_str()));
            out.put_str(Some("\n"));
            count += 1;
        }
        count
    }
}

impl Drop for List {
    fn drop(&mut self) {
        self.clear();
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(node)
    }
}
