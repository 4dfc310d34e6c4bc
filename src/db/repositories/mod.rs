mod menus;
mod messages;
mod votes;
