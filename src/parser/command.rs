pub type Name<'a> = &'a str;
pub type Number<'a> = &'a str;

#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    Getter {
        name: Name<'a>,
    },
    Setter {
        name: Name<'a>,
        number: Number<'a>,
    },
    Dump,
    Error(&'static str),
    Unknown,
    Empty,
}
