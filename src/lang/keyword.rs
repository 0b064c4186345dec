use super::LexemeClass;

thread_local!(
    static KEYWORDS: Trie = Trie::from_words(&[
        ("push", LexemeClass::Push),
        ("pop", LexemeClass::Pop),
        ("jmp", LexemeClass::Jmp),
        ("ji", LexemeClass::Ji),
        ("read", LexemeClass::Read),
        ("write", LexemeClass::Write),
        ("end", LexemeClass::End),
        ("vadd", LexemeClass::VAdd),
        ("vsub", LexemeClass::VSub),
        ("vmul", LexemeClass::VMul),
        ("vdiv", LexemeClass::VDiv),
        ("vmod", LexemeClass::VMod),
        ("vdot", LexemeClass::VDot),
        ("vconcat", LexemeClass::VConcat),
        ("vlshift", LexemeClass::VLShift),
        ("vrshift", LexemeClass::VRShift),
    ]);
);

pub type Node = usize;

pub const ROOT: Node = 0;

/// Advance one lowercase character from `node`.
/// `None` means no keyword continues with this character.
pub fn step(node: Node, ch: char) -> Option<Node> {
    KEYWORDS.with(|trie| trie.step(node, ch))
}

/// The keyword completed at `node`, if any.
pub fn keyword(node: Node) -> Option<LexemeClass> {
    KEYWORDS.with(|trie| trie.keyword(node))
}

pub fn lookup(word: &str) -> Option<LexemeClass> {
    KEYWORDS.with(|trie| trie.lookup(word))
}

#[derive(Debug, Default)]
struct TrieNode {
    children: Vec<(char, Node)>,
    keyword: Option<LexemeClass>,
}

/// ## Keyword trie
///
/// Keywords sharing a prefix share nodes, so `p` leads to both `push`
/// and `pop` until the second character decides.

#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn from_words(words: &[(&str, LexemeClass)]) -> Trie {
        let mut trie = Trie {
            nodes: vec![TrieNode::default()],
        };
        for (word, class) in words {
            trie.insert(word, *class);
        }
        trie
    }

    fn insert(&mut self, word: &str, class: LexemeClass) {
        let mut node = ROOT;
        for ch in word.chars() {
            node = match self.step(node, ch) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.push((ch, next));
                    next
                }
            };
        }
        debug_assert!(self.nodes[node].keyword.is_none());
        self.nodes[node].keyword = Some(class);
    }

    pub fn step(&self, node: Node, ch: char) -> Option<Node> {
        self.nodes
            .get(node)?
            .children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, next)| *next)
    }

    pub fn keyword(&self, node: Node) -> Option<LexemeClass> {
        self.nodes.get(node)?.keyword
    }

    pub fn lookup(&self, word: &str) -> Option<LexemeClass> {
        let mut node = ROOT;
        for ch in word.chars() {
            node = self.step(node, ch.to_ascii_lowercase())?;
        }
        self.keyword(node)
    }
}
