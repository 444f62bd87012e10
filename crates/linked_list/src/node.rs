use std::fmt;

pub type Link<T> = Option<Box<ListNode<T>>>;

pub struct ListNode<T> {
    pub val: T,
    pub next: Link<T>,
}

impl<T> ListNode<T> {
    pub fn new(val: T) -> Self {
        Self { val, next: None }
    }

    /// Values from this node to the end of the list.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        std::iter::successors(Some(self), |node| node.next.as_deref()).map(|node| &node.val)
    }
}

// Every trait below walks the chain in a loop. The derived versions recurse
// once per node and overflow the stack on long lists.

impl<T> Drop for ListNode<T> {
    fn drop(&mut self) {
        let mut cur = self.next.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: Clone> Clone for ListNode<T> {
    fn clone(&self) -> Self {
        let mut head = ListNode::new(self.val.clone());
        let mut tail = &mut head.next;
        for val in self.iter().skip(1) {
            tail = &mut tail.insert(Box::new(ListNode::new(val.clone()))).next;
        }
        head
    }
}

impl<T: PartialEq> PartialEq for ListNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ListNode<T> {}

impl<T: fmt::Debug> fmt::Debug for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub fn from_slice<T: Clone>(values: &[T]) -> Link<T> {
    values.iter().rev().fold(None, |next, val| {
        Some(Box::new(ListNode {
            val: val.clone(),
            next,
        }))
    })
}

pub fn to_vec<T: Clone>(head: &Link<T>) -> Vec<T> {
    head.as_deref()
        .map_or_else(Vec::new, |node| node.iter().cloned().collect())
}

pub fn len<T>(head: &Link<T>) -> usize {
    head.as_deref().map_or(0, |node| node.iter().count())
}

/// `1 -> 2 -> 3`, or `null` for an empty list.
pub fn format_list<T: fmt::Display>(head: &Link<T>) -> String {
    match head {
        Some(node) => node.to_string(),
        None => "null".to_owned(),
    }
}

impl<T: fmt::Display> fmt::Display for ListNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.val)?;
        for val in self.iter().skip(1) {
            write!(f, " -> {val}")?;
        }
        Ok(())
    }
}
