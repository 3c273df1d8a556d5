use chain_table::{ChainTable, Dump};
use log::debug;

use crate::contact::Contact;
use crate::error::MyResult;
use crate::options::Options;
use crate::parser::Command;
use crate::response::Response;

/// Phone numbers keyed by contact name.
pub struct ContactBook {
    table: ChainTable<String>,
}

impl ContactBook {
    pub fn new(capacity: usize) -> MyResult<Self> {
        Ok(ContactBook {
            table: ChainTable::new(capacity)?,
        })
    }

    pub fn from_options(opt: &Options) -> MyResult<Self> {
        Self::new(opt.capacity)
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    pub fn length(&self) -> usize {
        self.table.length()
    }

    /// Adds `name`, or overwrites the number of an existing contact in place.
    pub fn insert(&mut self, name: &str, number: &str) {
        let index = self.table.hash_index(name);
        match self.table.get_mut(name) {
            Some(stored) => {
                debug!("update {:?} in bucket {}", name, index);
                stored.clear();
                stored.push_str(number);
            }
            None => {
                debug!("insert {:?} into bucket {}", name, index);
                self.table.insert(name, number.to_owned());
            }
        }
    }

    pub fn search(&self, name: &str) -> Option<Contact> {
        self.table
            .get_key_value(name)
            .map(|(name, number)| Contact::new(name, number))
    }

    pub fn dump(&self) -> Dump<String> {
        self.table.dump()
    }

    pub fn apply(&mut self, command: Command) -> Response {
        match command {
            Command::Setter { name, number } => {
                self.insert(name, number);
                Response::Stored
            }
            Command::Getter { name } => match self.search(name) {
                Some(contact) => Response::Found(contact),
                None => Response::NotFound,
            },
            Command::Dump => Response::Dump(self.dump().map(|b| b.to_string()).collect()),
            Command::Error(e) => Response::ClientError(e),
            Command::Unknown => Response::Error,
            Command::Empty => Response::Nothing,
        }
    }
}
