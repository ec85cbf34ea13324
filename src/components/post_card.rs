use crate::feed::Post;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PostCardProps {
    pub post: Post,
}

#[function_component]
pub fn PostCard(props: &PostCardProps) -> Html {
    let post = &props.post;
    let action_style = "flex:1; padding:8px 0; background:none; border:none; border-radius:8px; color:#57606a; font-size:14px; cursor:pointer;";
    html! {
        <article style="background:#ffffff; border-radius:12px; box-shadow:0 1px 3px rgba(0,0,0,0.08); margin:0 0 16px 0; overflow:hidden;">
            <div style="display:flex; align-items:center; gap:12px; padding:14px 16px 8px 16px;">
                <img src={post.avatar.clone()} alt={post.author.clone()} style="width:44px; height:44px; border-radius:50%; object-fit:cover;" />
                <div style="display:flex; flex-direction:column;">
                    <h3 style="margin:0; font-size:15px; font-weight:600;">{ post.author.clone() }</h3>
                    <span style="font-size:12px; color:#8c959f;">{ post.time.clone() }</span>
                </div>
            </div>
            <div style="padding:0 16px 8px 16px;">
                <p style="margin:0 0 10px 0; line-height:1.45; font-size:15px;">{ post.content.clone() }</p>
                if let Some(image) = post.image.clone() {
                    <img src={image} alt="Post content" style="width:100%; border-radius:8px; display:block;" />
                }
            </div>
            <div style="display:flex; gap:4px; padding:4px 8px 8px 8px; border-top:1px solid #eaeef2;">
                <button style={action_style}>{ format!("❤️ {}", post.likes) }</button>
                <button style={action_style}>{"💬 Reply"}</button>
                <button style={action_style}>{"↗️ Share"}</button>
            </div>
        </article>
    }
}
