// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_schema::prelude::*;

#[derive(Model)]
pub struct Author {
    #[model(rename = "ID")]
    pub id: u64,
    #[model(rename = "Posts")]
    pub posts: Vec<Post>,
}

#[derive(Model)]
#[model(table = "posts")]
pub struct Post {
    #[model(rename = "ID")]
    pub id: u64,
    #[model(rename = "AuthorID")]
    pub author_id: u64,
    pub author: Option<Box<Author>>,
}

fn main() -> Result<(), SchemaError> {
    let schema: Schema = Registry::new()
        .register::<Author>()
        .register::<Post>()
        .build(&SchemaConfig::default())?;

    let post: &Entity = schema.table("Post")?;
    let author: &Field = post.field("author").unwrap();
    let edge: &Edge = author.edge.as_ref().unwrap();
    assert_eq!(edge.local_key, "AuthorID");
    assert_eq!(author.client_name(NamingCase::Camel), "author");

    let posts = schema.table("Author")?.field("Posts").unwrap();
    assert_eq!(posts.edge.as_ref().unwrap().target_key, "AuthorID");
    Ok(())
}
