//! Cart Repositories

mod carts;
mod items;
mod modifiers;

pub(crate) use carts::PgCartsRepository;
pub(crate) use items::PgCartItemsRepository;
pub(crate) use modifiers::PgCartItemModifiersRepository;
