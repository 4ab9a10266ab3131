use std::fmt::Debug;

use crate::types::Node;

/// Renders one child line given the indentation its own children must use.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Draws `children` as `├─` / `└─` branches below the current line.
///
/// Trailing `None` entries are dropped so the last printed child gets the
/// closing branch.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild>]) -> String {
    let mut out = String::new();

    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child_opt) in children.iter().enumerate().take(last + 1) {
        let Some(child_fn) = *child_opt else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let child = child_fn(&child_tab);
        let branch = if child.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !child.is_empty() {
            out.push(' ');
            out.push_str(&child);
        }
    }

    out
}

/// Debug printer for AVL subtrees, one node per line with its cached height
/// and balance factor.
pub fn print<K: Debug>(node: Option<&Node<K>>, tab: &str) -> String {
    let Some(n) = node else {
        return "∅".to_string();
    };
    let head = format!("{:?} [h={}, bf={}]", n.key(), n.height(), n.balance());
    if n.left().is_none() && n.right().is_none() {
        return head;
    }
    let left = |tab: &str| print(n.left(), tab);
    let right = |tab: &str| print(n.right(), tab);
    let children: [Option<&PrintChild>; 2] = [Some(&left), Some(&right)];
    head + &print_tree(tab, &children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_tree_skips_trailing_none() {
        let a = |_: &str| "a".to_string();
        let children: [Option<&PrintChild>; 3] = [Some(&a), Some(&a), None];
        assert_eq!(print_tree("", &children), "\n├─ a\n└─ a");
        assert_eq!(print_tree("", &[None, None]), "");
    }

    #[test]
    fn print_nested_nodes() {
        let mut root = Node::new(2);
        root.l = Some(Box::new(Node::new(1)));
        root.update_height();
        assert_eq!(
            print(Some(&root), ""),
            "2 [h=2, bf=1]\n├─ 1 [h=1, bf=0]\n└─ ∅"
        );
        assert_eq!(print::<i32>(None, ""), "∅");
    }
}
