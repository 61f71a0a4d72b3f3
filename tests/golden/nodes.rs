// AUTOMATICALLY GENERATED - DO NOT EDIT
// Produced 2024-01-01 00:00:00 by equivgen

impl AstEquiv for Span {
    #[allow(unused_variables, unreachable_patterns)]
    fn ast_equiv(&self, other: &Self) -> bool {
        true
    }
}

impl AstEquiv for Ident {
    #[allow(unused_variables, unreachable_patterns)]
    fn ast_equiv(&self, other: &Self) -> bool {
        // Exhaustiveness check
        match self {
            &Ident(ref _0, ref _1) => {}
        }

        // Comparison
        match (self, other) {
            (&Ident(ref _01, ref _11),
             &Ident(ref _02, ref _12)) => {
                AstEquiv::ast_equiv(_01, _02) &&
                AstEquiv::ast_equiv(_11, _12)
            }
            (_, _) => false,
        }
    }
}

impl AstEquiv for Mutability {
    #[allow(unused_variables, unreachable_patterns)]
    fn ast_equiv(&self, other: &Self) -> bool {
        self == other
    }
}

impl AstEquiv for Expr {
    #[allow(unused_variables, unreachable_patterns)]
    fn ast_equiv(&self, other: &Self) -> bool {
        // Exhaustiveness check
        match self {
            &Expr::Lit(ref _0) => {}
            &Expr::Var { name: ref name, mutability: ref mutability, span: ref span } => {}
            &Expr::Add(ref _0, ref _1) => {}
            &Expr::Block {} => {}
            &Expr::Unit => {}
        }

        // Comparison
        match (self, other) {
            (&Expr::Lit(ref _01),
             &Expr::Lit(ref _02)) => {
                AstEquiv::ast_equiv(_01, _02)
            }
            (&Expr::Var { name: ref name1, mutability: ref mutability1, span: ref span1 },
             &Expr::Var { name: ref name2, mutability: ref mutability2, span: ref span2 }) => {
                AstEquiv::ast_equiv(name1, name2) &&
                AstEquiv::ast_equiv(mutability1, mutability2) &&
                AstEquiv::ast_equiv(span1, span2)
            }
            (&Expr::Add(ref _01, ref _11),
             &Expr::Add(ref _02, ref _12)) => {
                AstEquiv::ast_equiv(_01, _02) &&
                AstEquiv::ast_equiv(_11, _12)
            }
            (&Expr::Block {},
             &Expr::Block {}) => {
                true
            }
            (&Expr::Unit,
             &Expr::Unit) => {
                true
            }
            (_, _) => false,
        }
    }
}

impl AstEquiv for Marker {
    #[allow(unused_variables, unreachable_patterns)]
    fn ast_equiv(&self, other: &Self) -> bool {
        // Exhaustiveness check
        match self {
            &Marker => {}
        }

        // Comparison
        match (self, other) {
            (&Marker,
             &Marker) => {
                true
            }
            (_, _) => false,
        }
    }
}

impl AstEquiv for Item {
    #[allow(unused_variables, unreachable_patterns)]
    fn ast_equiv(&self, other: &Self) -> bool {
        // Exhaustiveness check
        match self {
            &Item { ident: ref ident, body: ref body, span: ref span } => {}
        }

        // Comparison
        match (self, other) {
            (&Item { ident: ref ident1, body: ref body1, span: ref span1 },
             &Item { ident: ref ident2, body: ref body2, span: ref span2 }) => {
                AstEquiv::ast_equiv(ident1, ident2) &&
                AstEquiv::ast_equiv(body1, body2) &&
                AstEquiv::ast_equiv(span1, span2)
            }
            (_, _) => false,
        }
    }
}
