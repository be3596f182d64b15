//! AST visitor that collects translation call sites in document order.

use swc_common::{Loc, SourceMap, SourceMapper, Spanned};
use swc_ecma_ast::{CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberProp, Module};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::extract::{CallSite, KeyExpr, concatenation_key, literal_key};
use crate::core::{SourceContext, SourceLocation};

/// Collects calls to the configured translation functions.
///
/// A call matches when its callee text equals one of `functions`: a plain
/// identifier (`t`) or a dotted chain of identifiers (`i18n.t`). Only the
/// first argument is inspected; calls without arguments are ignored.
///
/// ```ignore
/// let calls = CallSiteExtractor::new("src/page.tsx", &source_map, &["t".into()])
///     .extract(&module);
/// ```
pub struct CallSiteExtractor<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    functions: &'a [String],
    calls: Vec<CallSite>,
}

impl<'a> CallSiteExtractor<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, functions: &'a [String]) -> Self {
        Self {
            file_path,
            source_map,
            functions,
            calls: Vec::new(),
        }
    }

    /// Walk the module depth-first and return call sites in document order.
    pub fn extract(mut self, module: &Module) -> Vec<CallSite> {
        self.visit_module(module);
        self.calls
    }

    /// Classify the first argument of a translation call.
    fn classify_argument(&self, arg: &ExprOrSpread) -> KeyExpr {
        let snippet = self.source_map.span_to_snippet(arg.expr.span()).ok();
        if arg.spread.is_some() {
            return KeyExpr::Dynamic(format!("...{}", snippet.unwrap_or_default()));
        }

        match (&*arg.expr, snippet) {
            (Expr::Bin(_), Some(text)) => KeyExpr::Static(concatenation_key(&text)),
            (Expr::Lit(Lit::Str(_)), Some(text)) => KeyExpr::Static(literal_key(&text)),
            (_, text) => KeyExpr::Dynamic(text.unwrap_or_default()),
        }
    }

    fn make_source_context(&self, loc: &Loc) -> SourceContext {
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();

        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }
}

/// Text of a callee made of identifiers and dotted member accesses.
///
/// Returns `None` for anything else (computed members, calls, `super`, ...).
fn callee_text(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => {
                callee_text(&member.obj).map(|obj| format!("{}.{}", obj, prop.sym))
            }
            _ => None,
        },
        _ => None,
    }
}

impl Visit for CallSiteExtractor<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(expr) = &node.callee
            && let Some(callee) = callee_text(expr)
            && self.functions.iter().any(|f| *f == callee)
            && let Some(arg) = node.args.first()
        {
            let loc = self.source_map.lookup_char_pos(node.span.lo);
            let key = self.classify_argument(arg);
            let context = self.make_source_context(&loc);
            self.calls.push(CallSite {
                context,
                callee,
                key,
            });
        }

        // Nested calls such as `t(t("a"))` are collected too.
        node.visit_children_with(self);
    }
}
