use std::fmt::*;

/// The path followed while reducing an AST.
///
/// Rules receive the path leading to the node they are reducing, which
/// lets them report where a problem lies without holding parent pointers.
///
/// ```
/// use jsgen_shared::ast::Path;
///
/// let mut path : Path<&'static str, &'static str> = Path::new();
/// assert!(path.get(0).is_none());
///
/// path.enter_interface("IfStatement");
/// assert_eq!(path.interface(), Some(&"IfStatement"));
/// assert!(path.get(0).is_none());
///
/// path.enter_field("consequent");
/// assert_eq!(path.interface(), None);
/// path.enter_interface("ExpressionStatement");
/// {
///   let item = path.get(0).unwrap();
///   assert_eq!(item.field, "consequent");
///   assert_eq!(item.interface, "IfStatement");
/// }
/// assert_eq!(format!("{:?}", path), "[\"IfStatement\".\"consequent\" > \"ExpressionStatement\"]");
///
/// // Interfaces and fields must be exited in the order in which they were entered.
/// path.exit_interface("ExpressionStatement");
/// path.exit_field("consequent");
/// path.exit_interface("IfStatement");
/// assert_eq!(path.len(), 0);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Default)]
pub struct Path<I, F>
where
    I: Debug + PartialEq,
    F: Debug + PartialEq,
{
    /// Some(foo) if we have entered interface foo but no field yet.
    /// Otherwise, None.
    interface: Option<I>,
    items: Vec<PathItem<I, F>>,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct PathItem<I, F>
where
    I: Debug + PartialEq,
    F: Debug + PartialEq,
{
    pub interface: I,
    pub field: F,
}

impl<I, F> Debug for Path<I, F>
where
    I: Debug + PartialEq,
    F: Debug + PartialEq,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        use itertools::Itertools;
        write!(
            f,
            "[{items}{more}]",
            items = self
                .items
                .iter()
                .map(|item| format!("{:?}.{:?}", item.interface, item.field))
                .format(" > "),
            more = match (self.items.is_empty(), &self.interface) {
                (_, &None) => "".to_string(),
                (true, &Some(ref interface)) => format!("{:?}", interface),
                (false, &Some(ref interface)) => format!(" > {:?}", interface),
            }
        )
    }
}

impl<I, F> Path<I, F>
where
    I: Debug + PartialEq,
    F: Debug + PartialEq,
{
    /// Create an empty `Path`.
    pub fn new() -> Self {
        Self {
            interface: None,
            items: vec![],
        }
    }

    /// Enter an interface.
    ///
    /// All calls to `enter_interface` MUST be balanced with calls
    /// to `exit_interface`.
    pub fn enter_interface(&mut self, node: I) {
        debug!(target: "path", "enter_interface: {:?}", node);
        debug_assert!(self.interface.is_none());
        self.interface = Some(node);
    }
    pub fn exit_interface(&mut self, node: I) {
        debug!(target: "path", "exit_interface: {:?}", node);
        let interface = self.interface.take();
        debug_assert!(interface == Some(node));
    }

    /// Enter a field of the current interface.
    ///
    /// Entering a field while no interface has been entered is a
    /// programming error.
    pub fn enter_field(&mut self, field: F) {
        debug!(target: "path", "enter_field: {:?} at {:?}", field, self.interface);
        match self.interface.take() {
            Some(interface) => self.items.push(PathItem { interface, field }),
            None => panic!("Could not enter field {:?} outside of an interface", field),
        }
    }
    pub fn exit_field(&mut self, field: F) {
        debug!(target: "path", "exit_field: {:?}", field);
        debug_assert!(self.interface.is_none());
        match self.items.pop() {
            Some(PathItem {
                interface,
                field: prev,
            }) => {
                debug_assert!(prev == field);
                self.interface = Some(interface);
            }
            None => panic!("Could not exit field {:?} from an empty Path", field),
        }
    }

    /// The interface entered most recently, if no field has been entered since.
    pub fn interface(&self) -> Option<&I> {
        self.interface.as_ref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The `index`-th item, counting from the innermost one.
    pub fn get(&self, index: usize) -> Option<&PathItem<I, F>> {
        if index >= self.len() {
            return None;
        }
        Some(&self.items[self.len() - index - 1])
    }

    /// Iter through the path, from the root to the current position.
    pub fn iter(&self) -> impl Iterator<Item = &PathItem<I, F>> {
        self.items.iter()
    }
}

#[cfg(test)]
mod test {
    use super::Path;

    #[test]
    fn test_path_debug_output() {
        let mut path: Path<&'static str, &'static str> = Path::new();
        assert_eq!(format!("{:?}", path), "[]");
        path.enter_interface("Script");
        assert_eq!(format!("{:?}", path), "[\"Script\"]");
        path.enter_field("statements");
        assert_eq!(format!("{:?}", path), "[\"Script\".\"statements\"]");
        path.enter_interface("ReturnStatement");
        path.enter_field("expression");
        assert_eq!(
            format!("{:?}", path),
            "[\"Script\".\"statements\" > \"ReturnStatement\".\"expression\"]"
        );
        assert_eq!(path.get(1).map(|item| item.interface), Some("Script"));
        assert_eq!(path.iter().count(), 2);
    }
}
