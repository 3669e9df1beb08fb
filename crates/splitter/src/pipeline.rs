use crate::classify::classify;
use crate::language::LanguageSpec;
use crate::partition::partition;
use crate::types::{Capability, UnitKind, UnitSpan};
use std::collections::BTreeMap;
use tree_sitter::Node;

pub(crate) type Categories = BTreeMap<UnitKind, Vec<UnitSpan>>;

/// Run every capability stage up to the language's tier, in order:
/// Plain → Function → Class → Interface.
///
/// A stage whose own categories are already populated returns without
/// touching anything, so re-running the pipeline is a no-op.
pub(crate) fn run(
    root: Node<'_>,
    source: &[u8],
    spec: &LanguageSpec,
    categories: &mut Categories,
) {
    plain_stage(root, source, spec, categories);
    if spec.capability >= Capability::Function {
        function_stage(root, source, spec, categories);
    }
    if spec.capability >= Capability::Class {
        class_stage(root, source, spec, categories);
    }
    if spec.capability >= Capability::Interface {
        interface_stage(root, source, spec, categories);
    }
}

/// Imports, literals and comments over the whole tree, nested included.
fn plain_stage(root: Node<'_>, source: &[u8], spec: &LanguageSpec, categories: &mut Categories) {
    if populated(categories, &[UnitKind::Import, UnitKind::Literal, UnitKind::Comment]) {
        return;
    }
    for (kind, node_kinds) in [
        (UnitKind::Import, spec.import_kinds),
        (UnitKind::Literal, spec.literal_kinds),
        (UnitKind::Comment, spec.comment_kinds),
    ] {
        let nodes = classify(root, node_kinds, false);
        categories.insert(kind, to_spans(&nodes, source));
    }
}

/// Outermost functions, their nested subfunctions, and literal refinement:
/// literals living inside a function body stop being free literals here.
fn function_stage(root: Node<'_>, source: &[u8], spec: &LanguageSpec, categories: &mut Categories) {
    if populated(categories, &[UnitKind::Function, UnitKind::Subfunction]) {
        return;
    }
    let function_nodes = classify(root, spec.function_kinds, true);
    let mut subfunction_nodes = Vec::new();
    for function in &function_nodes {
        subfunction_nodes.extend(classify(*function, spec.function_kinds, false));
    }
    subfunction_nodes.sort_by_key(|node| node.start_byte());

    let functions = to_spans(&function_nodes, source);
    let literals = take(categories, UnitKind::Literal);
    let (_, free_literals) = partition(&literals, &functions);

    categories.insert(UnitKind::Literal, free_literals);
    categories.insert(UnitKind::Function, functions);
    categories.insert(UnitKind::Subfunction, to_spans(&subfunction_nodes, source));
}

/// Outermost classes. Methods come from the grammar's own method kind when
/// it has one; otherwise the functions found inside a class body become
/// the methods. Literals inside class bodies are refined away last,
/// after the function pass already removed the innermost ones.
fn class_stage(root: Node<'_>, source: &[u8], spec: &LanguageSpec, categories: &mut Categories) {
    if populated(categories, &[UnitKind::Class, UnitKind::Method]) {
        return;
    }
    let classes = to_spans(&classify(root, spec.class_kinds, true), source);

    let mut methods = if spec.method_kinds.is_empty() {
        Vec::new()
    } else {
        to_spans(&classify(root, spec.method_kinds, true), source)
    };
    if methods.is_empty() {
        let functions = take(categories, UnitKind::Function);
        let (contained, free) = partition(&functions, &classes);
        methods = contained;
        categories.insert(UnitKind::Function, free);
    }

    let literals = take(categories, UnitKind::Literal);
    let (_, free_literals) = partition(&literals, &classes);

    categories.insert(UnitKind::Literal, free_literals);
    categories.insert(UnitKind::Class, classes);
    categories.insert(UnitKind::Method, methods);
}

fn interface_stage(
    root: Node<'_>,
    source: &[u8],
    spec: &LanguageSpec,
    categories: &mut Categories,
) {
    if populated(categories, &[UnitKind::Interface]) {
        return;
    }
    let interfaces = classify(root, spec.interface_kinds, true);
    categories.insert(UnitKind::Interface, to_spans(&interfaces, source));
}

fn populated(categories: &Categories, kinds: &[UnitKind]) -> bool {
    kinds
        .iter()
        .any(|kind| categories.get(kind).is_some_and(|spans| !spans.is_empty()))
}

fn take(categories: &mut Categories, kind: UnitKind) -> Vec<UnitSpan> {
    categories.remove(&kind).unwrap_or_default()
}

fn to_spans(nodes: &[Node<'_>], source: &[u8]) -> Vec<UnitSpan> {
    nodes
        .iter()
        .map(|node| UnitSpan {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            name: declared_name(*node, source),
        })
        .collect()
}

/// Name of the declaration a node represents. Grammars put the identifier
/// behind a `name` field (python, javascript, java), or bury it in a
/// `declarator` chain (c, cpp); the last resort is the first
/// identifier-kinded named child.
pub(crate) fn declared_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    if let Some(name) = node.child_by_field_name("name") {
        return node_text(name, source);
    }
    if let Some(declarator) = node.child_by_field_name("declarator") {
        return declarator_name(declarator, source);
    }
    let mut cursor = node.walk();
    let result = node.named_children(&mut cursor)
        .find(|child| child.kind().ends_with("identifier"))
        .and_then(|child| node_text(child, source));
    result
}

fn declarator_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    if node.kind().ends_with("identifier") {
        return node_text(node, source);
    }
    node.child_by_field_name("declarator")
        .and_then(|inner| declarator_name(inner, source))
}

fn node_text(node: Node<'_>, source: &[u8]) -> Option<String> {
    node.utf8_text(source).ok().map(str::to_string)
}
