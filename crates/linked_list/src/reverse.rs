use crate::ListError;
use crate::node::{Link, len};

pub fn reverse_list<T>(mut head: Link<T>) -> Link<T> {
    let mut prev = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = prev;
        prev = Some(node);
    }
    prev
}

/// Recursive reversal. One stack frame per node, so very long lists belong
/// to [`reverse_list`].
pub fn reverse_list_recursive<T>(head: Link<T>) -> Link<T> {
    fn relink<T>(head: Link<T>, reversed: Link<T>) -> Link<T> {
        match head {
            None => reversed,
            Some(mut node) => {
                let rest = node.next.take();
                node.next = reversed;
                relink(rest, Some(node))
            }
        }
    }
    relink(head, None)
}

/// Detaches every node onto a stack, then relinks them back to front.
pub fn reverse_list_with_stack<T>(mut head: Link<T>) -> Link<T> {
    let mut stack = Vec::new();
    while let Some(mut node) = head {
        head = node.next.take();
        stack.push(node);
    }

    let mut reversed: Link<T> = None;
    let mut tail = &mut reversed;
    while let Some(node) = stack.pop() {
        tail = &mut tail.insert(node).next;
    }
    reversed
}

/// Reverses the first `n` nodes in place, leaving the rest attached after
/// them. `n == 0` is a no-op. On error the list is unchanged.
pub fn reverse_first_n<T>(head: &mut Link<T>, n: usize) -> Result<(), ListError> {
    let total = len(head);
    if n > total {
        return Err(ListError::InvalidPosition {
            position: n,
            len: total,
        });
    }

    let mut taken = Vec::with_capacity(n);
    let mut rest = head.take();
    while taken.len() < n {
        match rest {
            Some(mut node) => {
                rest = node.next.take();
                taken.push(node);
            }
            None => break,
        }
    }

    *head = taken.into_iter().fold(rest, |next, mut node| {
        node.next = next;
        Some(node)
    });
    Ok(())
}

/// Reverses positions `left..=right` (1-based) in place. On error the list
/// is unchanged.
pub fn reverse_between<T>(
    head: &mut Link<T>,
    left: usize,
    right: usize,
) -> Result<(), ListError> {
    let total = len(head);
    if left == 0 || left > total {
        return Err(ListError::InvalidPosition {
            position: left,
            len: total,
        });
    }
    if right > total {
        return Err(ListError::InvalidPosition {
            position: right,
            len: total,
        });
    }
    if right < left {
        return Err(ListError::EmptyRange { left, right });
    }

    let mut link = head;
    for _ in 1..left {
        link = match link {
            Some(node) => &mut node.next,
            None => {
                return Err(ListError::InvalidPosition {
                    position: left,
                    len: total,
                });
            }
        };
    }
    reverse_first_n(link, right - left + 1)
}
