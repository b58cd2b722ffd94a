use crate::error::UnresolvedTokenError;
use crate::resolve::Resolver;
use crate::table::StyleTable;

use super::adapter::{Children, StyleProp, TreeAdapter};

/// Rewrites class strings into style lists across a tree.
#[derive(Debug, Clone)]
pub struct Rewriter<'t, A> {
    resolver: Resolver<'t>,
    adapter: A,
}

impl<'t, A: TreeAdapter> Rewriter<'t, A> {
    /// Creates a rewriter resolving against `table` with the default families.
    pub fn new(table: &'t StyleTable, adapter: A) -> Self {
        Self::with_resolver(Resolver::new(table), adapter)
    }

    pub fn with_resolver(resolver: Resolver<'t>, adapter: A) -> Self {
        Self { resolver, adapter }
    }

    pub fn resolver(&self) -> &Resolver<'t> {
        &self.resolver
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Rewrites `node` and its descendants.
    ///
    /// A node with a class string gets `style = existing ++ resolved`. A node
    /// whose class string and descendants needed nothing is returned as the
    /// same handle.
    ///
    /// # Errors
    ///
    /// The first unresolved token anywhere in the tree aborts the call.
    pub fn rewrite(&self, node: &A::Node) -> Result<A::Node, UnresolvedTokenError> {
        Ok(self.rewrite_node(node)?.unwrap_or_else(|| node.clone()))
    }

    /// `None` means the node is unchanged.
    fn rewrite_node(&self, node: &A::Node) -> Result<Option<A::Node>, UnresolvedTokenError> {
        let style = match self.adapter.class_string(node) {
            Some(classes) => {
                let mut list = self
                    .adapter
                    .style(node)
                    .map(StyleProp::to_list)
                    .unwrap_or_default();
                list.extend(self.resolver.resolve(classes)?);
                Some(list)
            }
            None => None,
        };

        let children = match self.adapter.children(node) {
            Some(children) => self.rewrite_children(children)?,
            None => None,
        };

        if style.is_none() && children.is_none() {
            return Ok(None);
        }
        Ok(Some(self.adapter.clone_with(node, style, children)))
    }

    fn rewrite_child(&self, child: &A::Child) -> Result<Option<A::Child>, UnresolvedTokenError> {
        match self.adapter.as_node(child) {
            Some(node) => Ok(self
                .rewrite_node(node)?
                .map(|node| self.adapter.into_child(node))),
            None => Ok(None),
        }
    }

    fn rewrite_children(
        &self,
        children: &Children<A::Child>,
    ) -> Result<Option<Children<A::Child>>, UnresolvedTokenError> {
        match children {
            Children::One(child) => Ok(self.rewrite_child(child)?.map(Children::One)),
            Children::Many(list) => {
                // Copied on the first change only.
                let mut rewritten: Option<Vec<A::Child>> = None;
                for (i, child) in list.iter().enumerate() {
                    if let Some(new_child) = self.rewrite_child(child)? {
                        rewritten.get_or_insert_with(|| list.clone())[i] = new_child;
                    }
                }
                Ok(rewritten.map(Children::Many))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::StyleConfig;
    use crate::fragment;
    use crate::tree::{Child, Element, ElementAdapter};

    fn table() -> StyleTable {
        StyleTable::build(&StyleConfig::default()).unwrap()
    }

    #[test]
    fn test_node_without_cls_is_same_handle() {
        let table = table();
        let rewriter = Rewriter::new(&table, ElementAdapter::default());
        let node = Arc::new(Element::new("view").child(Element::new("text")).child("Test"));
        let out = rewriter.rewrite(&node).unwrap();
        assert!(Arc::ptr_eq(&out, &node));
    }

    #[test]
    fn test_cls_prepends_existing_style() {
        let table = table();
        let rewriter = Rewriter::new(&table, ElementAdapter::default());

        let node = Arc::new(Element::new("view").cls("w5").with_style(fragment! { "width" => 5 }));
        assert_eq!(
            rewriter.rewrite(&node).unwrap().style_list(),
            Some(vec![fragment! { "width" => 5 }, fragment! { "width" => 256 }])
        );
    }

    #[test]
    fn test_input_is_not_mutated() {
        let table = table();
        let rewriter = Rewriter::new(&table, ElementAdapter::default());
        let node = Arc::new(Element::new("view").cls("b").child(Element::new("text").cls("f1")));
        let before = (*node).clone();
        rewriter.rewrite(&node).unwrap();
        assert_eq!(*node, before);
    }

    #[test]
    fn test_only_changed_children_are_replaced() {
        let table = table();
        let rewriter = Rewriter::new(&table, ElementAdapter::default());

        let plain = Arc::new(Element::new("text"));
        let styled = Arc::new(Element::new("text").cls("b"));
        let node = Arc::new(Element::new("view").children(vec![
            Child::from(plain.clone()),
            Child::from(styled.clone()),
        ]));

        let out = rewriter.rewrite(&node).unwrap();
        assert!(!Arc::ptr_eq(&out, &node));
        assert_eq!(out.style_list(), None);
        let children = out.child_nodes();
        assert!(Arc::ptr_eq(children[0], &plain));
        assert!(!Arc::ptr_eq(children[1], &styled));
        assert_eq!(children[1].style_list(), Some(vec![fragment! { "fontWeight" => "bold" }]));
    }

    #[test]
    fn test_error_in_descendant_aborts() {
        let table = table();
        let rewriter = Rewriter::new(&table, ElementAdapter::default());
        let node = Arc::new(
            Element::new("view")
                .cls("b")
                .child(Element::new("view").child(Element::new("text").cls("pa2 w8"))),
        );
        let err = rewriter.rewrite(&node).unwrap_err();
        assert_eq!(err, UnresolvedTokenError::new("w8"));
    }

    #[test]
    fn test_custom_resolver_families() {
        use crate::resolve::DynamicFamily;

        let table = table();
        let resolver = Resolver::new(&table).with_family(DynamicFamily::prefix("tint_", "tintColor"));
        let rewriter = Rewriter::with_resolver(resolver, ElementAdapter::default());
        let node = Arc::new(Element::new("image").cls("tint-red"));
        assert_eq!(
            rewriter.rewrite(&node).unwrap().style_list(),
            Some(vec![fragment! { "tintColor" => "red" }])
        );
        assert_eq!(rewriter.adapter().cls_prop(), "cls");
    }
}
