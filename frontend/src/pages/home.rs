use shared::registration::FormVariant;
use yew::prelude::*;

use crate::components::{
    achievements_carousel::AchievementsCarousel, hero::Hero, match_section::MatchSection,
    media_section::MediaSection, nav::scroll_to, player_section::PlayerSection,
    registration_form::RegistrationForm, stats_bar::StatsBar,
};

#[function_component(Home)]
pub fn home() -> Html {
    let on_navigate = Callback::from(|section: &'static str| scroll_to(section));

    html! {
        <div class="bg-gray-100">
            <Hero {on_navigate} />
            <StatsBar />

            <section id="about" class="py-16 bg-white scroll-mt-20">
                <div class="container mx-auto px-4">
                    <h3 class="text-5xl font-extrabold text-blue-900 text-center mb-8">{"About Us"}</h3>
                    <div class="max-w-3xl mx-auto text-center text-lg leading-relaxed text-gray-700 mb-12 space-y-4">
                        <p>
                            {"Founded in 2010, Spartans Cricket Club has been a cornerstone of our community's sporting excellence. \
                              We bring together passionate cricketers of all skill levels, fostering talent and sportsmanship."}
                        </p>
                        <p>
                            {"With state-of-the-art facilities and experienced coaches, we provide the perfect environment for \
                              players to develop their skills and compete at the highest levels."}
                        </p>
                    </div>
                    <AchievementsCarousel />
                </div>
            </section>

            <div id="media" class="scroll-mt-24">
                <MediaSection />
            </div>
            <div id="matches" class="bg-gray-50 scroll-mt-24">
                <MatchSection />
            </div>
            <div id="team" class="scroll-mt-24">
                <PlayerSection />
            </div>
            <div id="join" class="bg-white scroll-mt-24">
                <RegistrationForm variant={FormVariant::Register} />
            </div>
        </div>
    }
}
