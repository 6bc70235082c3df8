macro_rules! assert_miette_contains {
    ($diag:expr, [$($expected:expr),+ $(,)?]) => {{
        use miette::{GraphicalReportHandler, GraphicalTheme};

        let error: Box<$crate::ChemformError> = $diag.unwrap_err().into();
        let mut out = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .with_width(80)
            .render_report(&mut out, error.as_ref())
            .unwrap();
        $(
            assert!(
                out.contains($expected),
                "{:?} is missing from the report for `{}`:\n{out}",
                $expected,
                stringify!($diag)
            );
        )+
    }};
}

pub(crate) use assert_miette_contains;
