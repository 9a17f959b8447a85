use super::*;

impl Dom {
    pub(crate) fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    fn create_node(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    pub(crate) fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: HashMap<String, String>,
    ) -> NodeId {
        let checked = attrs.contains_key("checked");
        let id_attr = attrs.get("id").cloned();
        let element = Element {
            tag_name,
            attrs,
            checked,
        };
        let id = self.create_node(Some(parent), NodeType::Element(element));
        if let Some(id_attr) = id_attr {
            // First element in document order keeps the id.
            self.id_index.entry(id_attr).or_insert(id);
        }
        id
    }

    pub(crate) fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.create_node(Some(parent), NodeType::Text(text))
    }

    fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes.get(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    pub(crate) fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    pub(crate) fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.element(node_id)
            .and_then(|element| element.attrs.get(name).cloned())
    }

    pub(crate) fn checked(&self, node_id: NodeId) -> Result<bool> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::ElementNotFound(format!("checked target {node_id:?}")))?;
        Ok(element.checked)
    }

    pub(crate) fn set_checked(&mut self, node_id: NodeId, checked: bool) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::ElementNotFound(format!("checked target {node_id:?}")))?;
        element.checked = checked;
        Ok(())
    }

    pub(crate) fn style_get(&self, node_id: NodeId, key: &str) -> Result<String> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::ElementNotFound(format!("style target {node_id:?}")))?;
        let name = js_prop_to_css_name(key);
        let decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        Ok(decls
            .iter()
            .find(|(prop, _)| prop == &name)
            .map(|(_, value)| value.clone())
            .unwrap_or_default())
    }

    pub(crate) fn style_set(&mut self, node_id: NodeId, key: &str, value: &str) -> Result<()> {
        let name = js_prop_to_css_name(key);
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::ElementNotFound(format!("style target {node_id:?}")))?;

        let mut decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        if let Some(pos) = decls.iter().position(|(prop, _)| prop == &name) {
            if value.is_empty() {
                decls.remove(pos);
            } else {
                decls[pos].1 = value.to_string();
            }
        } else if !value.is_empty() {
            decls.push((name, value.to_string()));
        }

        // An emptied declaration block still leaves `style=""` behind.
        element
            .attrs
            .insert("style".to_string(), serialize_style_declarations(&decls));
        Ok(())
    }

    /// Detaches `node_id` from its parent and drops the ids of the detached subtree.
    pub(crate) fn remove_node(&mut self, node_id: NodeId) -> Result<()> {
        if node_id == self.root {
            return Err(Error::ElementNotFound("cannot remove the document".into()));
        }
        let parent = self.nodes[node_id.0].parent.take();
        if let Some(parent) = parent {
            self.nodes[parent.0].children.retain(|child| *child != node_id);
        }
        self.rebuild_id_index();
        Ok(())
    }

    fn rebuild_id_index(&mut self) {
        let mut index = HashMap::new();
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            if let Some(id_attr) = self.attr(node, "id") {
                index.entry(id_attr).or_insert(node);
            }
            stack.extend(self.nodes[node.0].children.iter().rev().copied());
        }
        self.id_index = index;
    }

    pub(crate) fn dump_node(&self, node_id: NodeId) -> String {
        match &self.nodes[node_id.0].node_type {
            NodeType::Document => self.nodes[node_id.0]
                .children
                .iter()
                .map(|child| self.dump_node(*child))
                .collect(),
            NodeType::Text(text) => text.clone(),
            NodeType::Element(element) => {
                let mut out = String::new();
                out.push('<');
                out.push_str(&element.tag_name);
                let mut attrs = element.attrs.iter().collect::<Vec<_>>();
                attrs.sort();
                for (k, v) in attrs {
                    out.push(' ');
                    out.push_str(k);
                    out.push_str("=\"");
                    out.push_str(v);
                    out.push('"');
                }
                out.push('>');
                if html::is_void_tag(&element.tag_name) {
                    return out;
                }
                for child in &self.nodes[node_id.0].children {
                    out.push_str(&self.dump_node(*child));
                }
                out.push_str("</");
                out.push_str(&element.tag_name);
                out.push('>');
                out
            }
        }
    }
}

impl ElementRegistry for Dom {
    type Handle = NodeId;

    fn resolve(&self, name: &str) -> Result<NodeId> {
        self.by_id(name)
            .ok_or_else(|| Error::ElementNotFound(name.to_string()))
    }

    fn checked(&self, handle: NodeId) -> Result<bool> {
        Dom::checked(self, handle)
    }

    fn set_checked(&mut self, handle: NodeId, checked: bool) -> Result<()> {
        Dom::set_checked(self, handle, checked)
    }

    fn inline_display(&self, handle: NodeId) -> Result<String> {
        self.style_get(handle, "display")
    }

    fn set_inline_display(&mut self, handle: NodeId, value: &str) -> Result<()> {
        self.style_set(handle, "display", value)
    }
}
