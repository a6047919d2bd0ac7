use crate::cpp::cursor::{Cursor, CursorKind};

/// Location and identifier copied out of a cursor.
///
/// Owns its data; nothing here refers back into the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclInfo {
    pub line: u32,
    pub column: u32,
    pub identifier: String,
}

/// One classified declaration, the atomic unit of grep output.
///
/// Closed union over exactly the ten recognized declaration kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclEntry {
    Class(DeclInfo),
    ClassTemplate(DeclInfo),
    ClassTemplatePartial(DeclInfo),
    Struct(DeclInfo),
    Function(DeclInfo),
    FunctionTemplate(DeclInfo),
    ConversionFunction(DeclInfo),
    Var(DeclInfo),
    Field(DeclInfo),
    Param(DeclInfo),
}

/// User-facing filter buckets aggregating the fine-grained kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryGroup {
    Class,
    Struct,
    Function,
    Variable,
}

impl DeclEntry {
    pub fn info(&self) -> &DeclInfo {
        match self {
            DeclEntry::Class(info)
            | DeclEntry::ClassTemplate(info)
            | DeclEntry::ClassTemplatePartial(info)
            | DeclEntry::Struct(info)
            | DeclEntry::Function(info)
            | DeclEntry::FunctionTemplate(info)
            | DeclEntry::ConversionFunction(info)
            | DeclEntry::Var(info)
            | DeclEntry::Field(info)
            | DeclEntry::Param(info) => info,
        }
    }

    /// The fixed kind-to-bucket mapping.
    pub fn group(&self) -> CategoryGroup {
        match self {
            DeclEntry::Class(_) | DeclEntry::ClassTemplate(_) | DeclEntry::ClassTemplatePartial(_) => {
                CategoryGroup::Class
            }
            DeclEntry::Struct(_) => CategoryGroup::Struct,
            DeclEntry::Function(_)
            | DeclEntry::FunctionTemplate(_)
            | DeclEntry::ConversionFunction(_) => CategoryGroup::Function,
            DeclEntry::Var(_) | DeclEntry::Field(_) | DeclEntry::Param(_) => CategoryGroup::Variable,
        }
    }

    /// Short label used by the presentation layer.
    pub fn kind_label(&self) -> &'static str {
        match self {
            DeclEntry::Class(_) => "class",
            DeclEntry::ClassTemplate(_) => "class template",
            DeclEntry::ClassTemplatePartial(_) => "partial specialization",
            DeclEntry::Struct(_) => "struct",
            DeclEntry::Function(_) => "function",
            DeclEntry::FunctionTemplate(_) => "function template",
            DeclEntry::ConversionFunction(_) => "conversion function",
            DeclEntry::Var(_) => "variable",
            DeclEntry::Field(_) => "field",
            DeclEntry::Param(_) => "param",
        }
    }
}

/// Map a cursor onto a declaration entry.
///
/// Total over the cursor kind table: unrecognized nodes produce `None`, which
/// is the common case and never an error. Line, column and spelling are
/// copied by value so the entry outlives the tree.
pub fn classify(cursor: &Cursor<'_>) -> Option<DeclEntry> {
    let constructor: fn(DeclInfo) -> DeclEntry = match cursor.kind() {
        CursorKind::ClassDecl => DeclEntry::Class,
        CursorKind::ClassTemplate => DeclEntry::ClassTemplate,
        CursorKind::ClassTemplatePartialSpecialization => DeclEntry::ClassTemplatePartial,
        CursorKind::StructDecl => DeclEntry::Struct,
        CursorKind::FunctionDecl => DeclEntry::Function,
        CursorKind::FunctionTemplate => DeclEntry::FunctionTemplate,
        CursorKind::ConversionFunction => DeclEntry::ConversionFunction,
        CursorKind::VarDecl => DeclEntry::Var,
        CursorKind::FieldDecl => DeclEntry::Field,
        CursorKind::ParamDecl => DeclEntry::Param,
        CursorKind::Other => return None,
    };
    Some(constructor(DeclInfo {
        line: cursor.line(),
        column: cursor.column(),
        identifier: cursor.spelling(),
    }))
}
