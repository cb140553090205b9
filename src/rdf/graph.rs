use std::collections::HashSet;
use std::fmt;

/// A resource that can appear in subject position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Node {
    Named(String),
    Blank(String),
}

impl Node {
    pub fn named<T: Into<String>>(iri: T) -> Node {
        Node::Named(iri.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Named(iri) => write!(f, "<{}>", iri),
            Node::Blank(id) => write!(f, "_:{}", id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    pub value: String,
    pub datatype: String,
}

impl Literal {
    pub fn typed<V: Into<String>>(value: V, datatype: &str) -> Literal {
        Literal {
            value: value.into(),
            datatype: String::from(datatype),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Object {
    Node(Node),
    Literal(Literal),
}

impl From<Node> for Object {
    fn from(node: Node) -> Self {
        Object::Node(node)
    }
}

impl From<&Node> for Object {
    fn from(node: &Node) -> Self {
        Object::Node(node.clone())
    }
}

impl From<Literal> for Object {
    fn from(literal: Literal) -> Self {
        Object::Literal(literal)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    pub subject: Node,
    pub predicate: String,
    pub object: Object,
}

/// A set of triples plus the prefixes to abbreviate them with. Built per
/// request and owned by it.
///
/// Triples keep their insertion order so serializations are stable; adding a
/// triple that is already present is a no-op.
#[derive(Clone, Debug, Default)]
pub struct RdfGraph {
    prefixes: Vec<(String, String)>,
    triples: Vec<Triple>,
    index: HashSet<Triple>,
    blank_count: usize,
}

impl RdfGraph {
    pub fn new() -> RdfGraph {
        RdfGraph::default()
    }

    /// Binds `prefix` to `namespace`, replacing an earlier binding of the prefix.
    pub fn bind(&mut self, prefix: &str, namespace: &str) {
        match self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            Some(binding) => binding.1 = String::from(namespace),
            None => self
                .prefixes
                .push((String::from(prefix), String::from(namespace))),
        }
    }

    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Allocates a fresh anonymous node.
    pub fn blank(&mut self) -> Node {
        let id = format!("b{}", self.blank_count);
        self.blank_count += 1;

        Node::Blank(id)
    }

    pub fn add<O: Into<Object>>(&mut self, subject: &Node, predicate: &str, object: O) {
        let triple = Triple {
            subject: subject.clone(),
            predicate: String::from(predicate),
            object: object.into(),
        };

        if self.index.insert(triple.clone()) {
            self.triples.push(triple);
        }
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, subject: &Node, predicate: &str, object: &Object) -> bool {
        self.triples
            .iter()
            .any(|t| &t.subject == subject && t.predicate == predicate && &t.object == object)
    }

    pub fn objects<'a: 'b, 'b>(
        &'a self,
        subject: &'b Node,
        predicate: &'b str,
    ) -> impl Iterator<Item = &'a Object> + 'b {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    pub fn subjects<'a: 'b, 'b>(
        &'a self,
        predicate: &'b str,
        object: &'b Object,
    ) -> impl Iterator<Item = &'a Node> + 'b {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && &t.object == object)
            .map(|t| &t.subject)
    }

    /// All distinct subjects, in order of first appearance.
    pub fn subject_nodes(&self) -> Vec<&Node> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}
