use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string_len_uniq(Users::Email, 100))
                    .col(string(Users::Password))
                    .col(string_len(Users::Name, 100))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(pk_auto(BlogPost::Id))
                    .col(integer(BlogPost::AuthorId))
                    .col(string_len_uniq(BlogPost::Title, 250))
                    .col(string_len(BlogPost::Subtitle, 250))
                    .col(string_len(BlogPost::Date, 250))
                    .col(text(BlogPost::Body))
                    .col(string_len(BlogPost::ImgUrl, 250))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-blog_post-author_id")
                            .from(BlogPost::Table, BlogPost::AuthorId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::Id))
                    .col(integer(Comments::CommenterId))
                    .col(integer_null(Comments::PostId))
                    .col(text(Comments::Text))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-comments-commenter_id")
                            .from(Comments::Table, Comments::CommenterId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-comments-post_id")
                            .from(Comments::Table, Comments::PostId)
                            .to(BlogPost::Table, BlogPost::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BlogPost::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Password,
    Name,
}

#[derive(DeriveIden)]
enum BlogPost {
    Table,
    Id,
    AuthorId,
    Title,
    Subtitle,
    Date,
    Body,
    ImgUrl,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    CommenterId,
    PostId,
    Text,
}
