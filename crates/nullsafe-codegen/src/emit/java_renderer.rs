//! Renders a `WrapperClass` as a Java compilation unit.

use std::fmt::{self, Write};

use nullsafe_core::model::{Parameter, Statement, WrapperClass, WrapperMethod};

/// Java source renderer. Layout: package, imports, class Javadoc (origin
/// docs, a blank line, the attribution), then one method per wrapper.
#[derive(Debug, Clone)]
pub struct JavaRenderer {
    indent: String,
}

impl Default for JavaRenderer {
    fn default() -> Self {
        Self::new("  ")
    }
}

impl JavaRenderer {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    pub fn render(&self, class: &WrapperClass) -> String {
        JavaSource {
            class,
            indent: &self.indent,
        }
        .to_string()
    }
}

struct JavaSource<'a> {
    class: &'a WrapperClass,
    indent: &'a str,
}

impl fmt::Display for JavaSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = self.class;

        if let Some(pkg) = &class.package {
            writeln!(f, "package {pkg};")?;
            writeln!(f)?;
        }
        if !class.imports.is_empty() {
            for import in &class.imports {
                writeln!(f, "import {import};")?;
            }
            writeln!(f)?;
        }

        let mut doc: Vec<&str> = Vec::new();
        if let Some(origin_doc) = &class.doc {
            doc.extend(origin_doc.lines());
            doc.push("");
        }
        doc.push(&class.attribution);
        write_javadoc(f, "", &doc)?;

        writeln!(f, "public final class {} {{", class.name)?;
        for (i, method) in class.methods.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.write_method(f, method)?;
        }
        writeln!(f, "}}")
    }
}

impl JavaSource<'_> {
    fn write_method(&self, f: &mut fmt::Formatter<'_>, method: &WrapperMethod) -> fmt::Result {
        let ind = self.indent;
        let ind2 = ind.repeat(2);
        let ind3 = ind.repeat(3);

        if let Some(doc) = &method.doc {
            let lines: Vec<&str> = doc.lines().collect();
            write_javadoc(f, ind, &lines)?;
        }
        for annotation in &method.annotations {
            writeln!(f, "{ind}{}", annotation.text)?;
        }

        write!(f, "{ind}{} ", method.modifiers)?;
        if let Some(tp) = &method.type_parameters {
            write!(f, "{tp} ")?;
        }
        write!(f, "{} {}(", method.return_type, method.name)?;
        for (i, param) in method.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_parameter(f, param)?;
        }
        f.write_char(')')?;
        if !method.thrown.is_empty() {
            f.write_str(" throws ")?;
            for (i, thrown) in method.thrown.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{thrown}")?;
            }
        }
        writeln!(f, " {{")?;

        for statement in &method.body {
            match statement {
                Statement::NullGuard { parameter } => {
                    writeln!(f, "{ind2}if ({parameter} == null) {{")?;
                    writeln!(f, "{ind3}return null;")?;
                    writeln!(f, "{ind2}}}")?;
                }
                Statement::Delegate {
                    target,
                    method,
                    arguments,
                } => {
                    writeln!(f, "{ind2}return {target}.{method}({});", arguments.join(", "))?;
                }
            }
        }
        writeln!(f, "{ind}}}")
    }
}

fn write_parameter(f: &mut fmt::Formatter<'_>, param: &Parameter) -> fmt::Result {
    if param.varargs {
        write!(f, "{}... {}", param.ty, param.name)
    } else {
        write!(f, "{} {}", param.ty, param.name)
    }
}

fn write_javadoc(f: &mut fmt::Formatter<'_>, indent: &str, lines: &[&str]) -> fmt::Result {
    writeln!(f, "{indent}/**")?;
    for line in lines {
        if line.is_empty() {
            writeln!(f, "{indent} *")?;
        } else {
            writeln!(f, "{indent} * {line}")?;
        }
    }
    writeln!(f, "{indent} */")
}
