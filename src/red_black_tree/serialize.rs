use crate::red_black_tree::tree::RedBlackTree;
use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

// Serialized as a sequence of values in sorted order.
impl<T> Serialize for RedBlackTree<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.in_order() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct RedBlackTreeVisitor<T> {
    marker: PhantomData<fn() -> RedBlackTree<T>>,
}

impl<'de, T> Visitor<'de> for RedBlackTreeVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = RedBlackTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of values")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = RedBlackTree::new();
        while let Some(value) = seq.next_element()? {
            tree.add(value);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for RedBlackTree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(RedBlackTreeVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::red_black_tree::RedBlackTree;
    use serde_test::{assert_de_tokens, assert_ser_tokens, assert_tokens, Token};

    #[test]
    fn test_ser_de_empty() {
        let tree: RedBlackTree<u32> = RedBlackTree::new();
        assert_tokens(&tree, &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
    }

    #[test]
    fn test_ser_sorted() {
        let tree = RedBlackTree::from_values(vec![3u32, 1, 2, 1]);
        assert_ser_tokens(
            &tree,
            &[
                Token::Seq { len: Some(4) },
                Token::U32(1),
                Token::U32(1),
                Token::U32(2),
                Token::U32(3),
                Token::SeqEnd,
            ],
        );
    }

    #[test]
    fn test_de_unsorted() {
        let tree = RedBlackTree::from_values(vec![1u32, 2, 3]);
        assert_de_tokens(
            &tree,
            &[
                Token::Seq { len: Some(3) },
                Token::U32(3),
                Token::U32(1),
                Token::U32(2),
                Token::SeqEnd,
            ],
        );
    }
}
