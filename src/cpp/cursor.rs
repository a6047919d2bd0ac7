//! Cursor-style view over tree-sitter C++ nodes.
//!
//! Kind resolution is context-sensitive over the grammar: the same
//! `declaration` node kind covers free functions, variables and conversion
//! operators, so the cursor inspects the declarator chain and the enclosing
//! scope to report one of the recognized declaration kinds.

use tree_sitter::Node;

/// Declaration kinds the grep engine recognizes.
///
/// Member functions, constructors and destructors are deliberately absent:
/// only free functions, function templates and conversion operators are
/// reported under the function bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    ClassDecl,
    ClassTemplate,
    ClassTemplatePartialSpecialization,
    StructDecl,
    FunctionDecl,
    FunctionTemplate,
    ConversionFunction,
    VarDecl,
    FieldDecl,
    ParamDecl,
    /// Any node of no interest to the grep engine.
    Other,
}

/// Traversal decision returned by a visitation callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitAction {
    /// Skip this node's subtree and continue with its next sibling.
    Continue,
    /// Descend into this node's children.
    Recurse,
}

/// What the declarator chain of a declaration node resolves to.
enum DeclaratorShape {
    Function,
    /// A function declared under a qualified name, i.e. an out-of-class
    /// member definition like `void person::run() {}`.
    QualifiedFunction,
    Conversion,
    Object,
    None,
}

/// Borrowed view over one syntax tree node.
///
/// A `Cursor` is only valid inside the visitation callback that produced
/// it. Consumers copy out primitive fields (line, column, spelling) rather
/// than holding on to the cursor itself.
pub struct Cursor<'a> {
    node: Node<'a>,
    source: &'a [u8],
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(node: Node<'a>, source: &'a [u8]) -> Self {
        Self { node, source }
    }

    /// 1-based source line.
    pub fn line(&self) -> u32 {
        self.node.start_position().row as u32 + 1
    }

    /// 1-based source column.
    pub fn column(&self) -> u32 {
        self.node.start_position().column as u32 + 1
    }

    /// Whether this node's location lies inside a system header.
    ///
    /// tree-sitter parses exactly the bytes it is handed and never expands
    /// `#include`, so no node of this front end can come from a header.
    pub fn is_in_system_header(&self) -> bool {
        false
    }

    /// Whether this node belongs to the file that was requested.
    ///
    /// Always true for the same reason [`Cursor::is_in_system_header`] is
    /// always false: the tree only ever spans the requested file.
    pub fn is_in_primary_file(&self) -> bool {
        true
    }

    /// Resolve this node to a recognized declaration kind.
    pub fn kind(&self) -> CursorKind {
        match self.node.kind() {
            "class_specifier" => self.class_kind(),
            "struct_specifier" => self.struct_kind(),
            "function_definition" | "declaration" | "field_declaration" => self.declarator_kind(),
            "parameter_declaration" | "optional_parameter_declaration" => CursorKind::ParamDecl,
            _ => CursorKind::Other,
        }
    }

    /// The declared identifier, without qualifiers or template arguments.
    ///
    /// Unnamed declarations (anonymous parameters, abstract declarators)
    /// yield an empty string.
    pub fn spelling(&self) -> String {
        match self.node.kind() {
            "class_specifier" | "struct_specifier" => self
                .node
                .child_by_field_name("name")
                .map(|n| self.type_name_text(n))
                .unwrap_or_default(),
            "function_definition"
            | "declaration"
            | "field_declaration"
            | "parameter_declaration"
            | "optional_parameter_declaration" => self
                .declared_declarator()
                .map(|d| self.identifier_of(d))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn class_kind(&self) -> CursorKind {
        let Some(name) = self.node.child_by_field_name("name") else {
            return CursorKind::Other;
        };
        if !self.templated() {
            return CursorKind::ClassDecl;
        }
        // A template_type name carries explicit template arguments, which
        // marks a partial specialization.
        if name.kind() == "template_type" {
            CursorKind::ClassTemplatePartialSpecialization
        } else {
            CursorKind::ClassTemplate
        }
    }

    fn struct_kind(&self) -> CursorKind {
        // Struct templates stay in the struct bucket, unlike class templates.
        if self.node.child_by_field_name("name").is_some() {
            CursorKind::StructDecl
        } else {
            CursorKind::Other
        }
    }

    fn declarator_kind(&self) -> CursorKind {
        match self.declarator_shape() {
            DeclaratorShape::Conversion => CursorKind::ConversionFunction,
            DeclaratorShape::Function => {
                if self.templated() {
                    CursorKind::FunctionTemplate
                } else if self.in_member_scope() {
                    // Plain member functions, constructors and destructors
                    // are not recognized declaration kinds.
                    CursorKind::Other
                } else {
                    CursorKind::FunctionDecl
                }
            }
            // Out-of-class member definitions declare no new entity; they
            // fall under the same member-function exclusion as in-class
            // definitions.
            DeclaratorShape::QualifiedFunction => CursorKind::Other,
            DeclaratorShape::Object => match self.node.kind() {
                "field_declaration" => CursorKind::FieldDecl,
                "declaration" => CursorKind::VarDecl,
                _ => CursorKind::Other,
            },
            DeclaratorShape::None => CursorKind::Other,
        }
    }

    /// The node's outermost declarator. Usually behind the `declarator`
    /// field; fall back to the first declarator-shaped named child for
    /// productions that omit the field.
    fn declared_declarator(&self) -> Option<Node<'a>> {
        self.node
            .child_by_field_name("declarator")
            .or_else(|| first_declarator_child(self.node))
    }

    /// Walk the declarator chain, unwrapping pointer/reference/array and
    /// initializer wrappers until the underlying shape is known.
    fn declarator_shape(&self) -> DeclaratorShape {
        let Some(mut decl) = self.declared_declarator() else {
            return DeclaratorShape::None;
        };
        loop {
            match decl.kind() {
                "operator_cast" => return DeclaratorShape::Conversion,
                "function_declarator" => {
                    return match decl.child_by_field_name("declarator") {
                        Some(inner) if inner.kind() == "qualified_identifier" => {
                            // `Type Scope::operator T()` still declares a
                            // conversion function; anything else qualified is
                            // an out-of-class member definition.
                            if qualified_terminal(inner).kind() == "operator_cast" {
                                DeclaratorShape::Conversion
                            } else {
                                DeclaratorShape::QualifiedFunction
                            }
                        }
                        _ => DeclaratorShape::Function,
                    };
                }
                // A parenthesized declarator means a function pointer: the
                // declared entity is an object, not a function.
                "parenthesized_declarator" => return DeclaratorShape::Object,
                "qualified_identifier" => {
                    return if qualified_terminal(decl).kind() == "operator_cast" {
                        DeclaratorShape::Conversion
                    } else {
                        DeclaratorShape::Object
                    };
                }
                "identifier"
                | "field_identifier"
                | "structured_binding_declarator" => return DeclaratorShape::Object,
                "pointer_declarator"
                | "reference_declarator"
                | "init_declarator"
                | "array_declarator" => match unwrap_declarator(decl) {
                    Some(inner) => decl = inner,
                    None => return DeclaratorShape::None,
                },
                _ => return DeclaratorShape::None,
            }
        }
    }

    /// Whether the node sits directly in a class/struct body. Scopes opened
    /// by statement blocks or namespaces reset the answer; transparent
    /// wrappers like `template_declaration` do not.
    fn in_member_scope(&self) -> bool {
        let mut node = self.node;
        while let Some(parent) = node.parent() {
            match parent.kind() {
                "field_declaration_list" => return true,
                "translation_unit" | "declaration_list" | "compound_statement" => return false,
                _ => node = parent,
            }
        }
        false
    }

    fn templated(&self) -> bool {
        self.node
            .parent()
            .is_some_and(|p| p.kind() == "template_declaration")
    }

    /// Name text for a class/struct name node, dropping template arguments.
    fn type_name_text(&self, name: Node<'a>) -> String {
        if name.kind() == "template_type" {
            return name
                .child_by_field_name("name")
                .map(|n| self.text(n))
                .unwrap_or_default();
        }
        self.text(name)
    }

    /// Resolve a declarator node to the declared identifier.
    fn identifier_of(&self, decl: Node<'a>) -> String {
        match decl.kind() {
            "identifier" | "field_identifier" | "type_identifier" | "operator_name"
            | "destructor_name" => self.text(decl),
            "qualified_identifier" => decl
                .child_by_field_name("name")
                .map(|n| self.identifier_of(n))
                .unwrap_or_default(),
            // `operator <type>` reads up to the parameter list.
            "operator_cast" => self
                .text(decl)
                .split('(')
                .next()
                .unwrap_or("")
                .trim()
                .to_string(),
            "function_declarator"
            | "pointer_declarator"
            | "reference_declarator"
            | "init_declarator"
            | "array_declarator"
            | "parenthesized_declarator" => unwrap_declarator(decl)
                .map(|inner| self.identifier_of(inner))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn text(&self, node: Node<'a>) -> String {
        std::str::from_utf8(&self.source[node.byte_range()])
            .unwrap_or("")
            .to_string()
    }
}

/// Step one level into a wrapper declarator. Wrappers usually expose a
/// `declarator` field; `reference_declarator` does not, so fall back to the
/// first named child that looks like a declarator.
fn unwrap_declarator(decl: Node<'_>) -> Option<Node<'_>> {
    if let Some(inner) = decl.child_by_field_name("declarator") {
        return Some(inner);
    }
    first_declarator_child(decl)
}

/// Innermost name of a `qualified_identifier` chain, e.g. the `run` of
/// `person::run` or the `operator int` of `person::operator int`.
fn qualified_terminal(mut node: Node<'_>) -> Node<'_> {
    while node.kind() == "qualified_identifier" {
        match node.child_by_field_name("name") {
            Some(name) => node = name,
            None => break,
        }
    }
    node
}

/// First named child that is a declarator production or a declared name.
fn first_declarator_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut walk = node.walk();
    let inner = node.named_children(&mut walk).find(|c| {
        matches!(
            c.kind(),
            "identifier"
                | "field_identifier"
                | "qualified_identifier"
                | "operator_name"
                | "destructor_name"
                | "operator_cast"
                | "function_declarator"
                | "pointer_declarator"
                | "reference_declarator"
                | "parenthesized_declarator"
                | "array_declarator"
                | "init_declarator"
        )
    });
    inner
}

/// Drive depth-first, pre-order traversal over the children of `root`,
/// handing each node to `callback`. The callback's [`VisitAction`] decides
/// whether the node's subtree is entered; emission order is parent before
/// descendants, siblings in source order.
pub fn visit_children<F>(root: Node<'_>, source: &[u8], mut callback: F)
where
    F: FnMut(&Cursor<'_>) -> VisitAction,
{
    visit_recursive(root, source, &mut callback);
}

fn visit_recursive<F>(node: Node<'_>, source: &[u8], callback: &mut F)
where
    F: FnMut(&Cursor<'_>) -> VisitAction,
{
    let mut walk = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut walk).collect();
    for child in children {
        let cursor = Cursor::new(child, source);
        if callback(&cursor) == VisitAction::Recurse {
            visit_recursive(child, source, callback);
        }
    }
}
